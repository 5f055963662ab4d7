//! Handler for POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use av_core::repositories::AccountRepository;
use av_core::services::PasswordVerifier;

use crate::dto::auth_dto::{AccountResponse, RegisterRequest};
use crate::handlers::error_handler::{validation_failure, ApiError};

use super::AppState;

/// Create a new account
///
/// Responds 201 with the created account on success, 400 on shape
/// violations and 409 when the email is already registered.
pub async fn register<R, P>(
    state: web::Data<AppState<R, P>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: AccountRepository + 'static,
    P: PasswordVerifier + 'static,
{
    request.validate().map_err(|e| validation_failure(&e))?;

    let account = state
        .auth_service
        .register(&request.username, &request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}
