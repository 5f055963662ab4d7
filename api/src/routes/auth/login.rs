//! Handler for POST /api/v1/auth/login

use actix_web::{cookie::time::Duration as CookieDuration, web, HttpResponse};
use validator::Validate;

use av_core::domain::entities::token::REFRESH_TOKEN_EXPIRY_DAYS;
use av_core::repositories::AccountRepository;
use av_core::services::PasswordVerifier;
use av_shared::types::response::MessageResponse;

use crate::dto::auth_dto::LoginRequest;
use crate::handlers::error_handler::{validation_failure, ApiError};
use crate::middleware::auth::{access_cookie, session_cookie, REFRESH_COOKIE};

use super::AppState;

/// Authenticate and establish a cookie session
///
/// On success both session cookies are set HttpOnly; the body is a plain
/// acknowledgement so credentials never round-trip.
pub async fn login<R, P>(
    state: web::Data<AppState<R, P>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    P: PasswordVerifier + 'static,
{
    request.validate().map_err(|e| validation_failure(&e))?;

    let pair = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created()
        .cookie(access_cookie(pair.access_token))
        .cookie(session_cookie(
            REFRESH_COOKIE,
            pair.refresh_token,
            CookieDuration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        ))
        .json(MessageResponse::new("Login successful")))
}
