//! Handler for DELETE /api/v1/auth/logout

use actix_web::HttpResponse;

use av_shared::types::response::MessageResponse;

use crate::middleware::auth::{expired_cookie, ACCESS_COOKIE, REFRESH_COOKIE};
use crate::middleware::AuthContext;

/// End the session by clearing both cookies
///
/// Tokens are stateless, so logout is purely a client-side affair; the
/// guard still requires a valid session so an anonymous caller gets 401.
pub async fn logout(_auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(expired_cookie(ACCESS_COOKIE))
        .cookie(expired_cookie(REFRESH_COOKIE))
        .json(MessageResponse::new("Logout successful"))
}
