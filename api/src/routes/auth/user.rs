//! Handler for GET /api/v1/auth/user

use actix_web::{web, HttpResponse};

use av_core::repositories::AccountRepository;
use av_core::services::PasswordVerifier;

use crate::dto::auth_dto::AccountResponse;
use crate::handlers::error_handler::ApiError;
use crate::middleware::AuthContext;

use super::AppState;

/// Fetch the account behind the verified session
///
/// Runs behind the session middleware; a renewed access cookie, when one
/// was issued, is attached there.
pub async fn get_user<R, P>(
    state: web::Data<AppState<R, P>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    P: PasswordVerifier + 'static,
{
    let account = state.auth_service.fetch_account(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}
