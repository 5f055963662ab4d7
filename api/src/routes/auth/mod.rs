//! Authentication route handlers
//!
//! - `POST /register` — create an account
//! - `POST /login` — issue the session cookie pair
//! - `GET /user` — fetch the authenticated account (session-guarded)
//! - `DELETE /logout` — clear the session cookies (session-guarded)

pub mod login;
pub mod logout;
pub mod register;
pub mod user;

use actix_web::web;
use std::sync::Arc;

use av_core::repositories::AccountRepository;
use av_core::services::auth::AuthService;
use av_core::services::PasswordVerifier;

use crate::middleware::SessionAuth;

/// Application state holding the shared authentication service
pub struct AppState<R, P>
where
    R: AccountRepository,
    P: PasswordVerifier,
{
    pub auth_service: Arc<AuthService<R, P>>,
}

/// Mount the auth routes on a scope; `/user` and `/logout` sit behind the
/// session middleware
pub fn configure<R, P>(cfg: &mut web::ServiceConfig)
where
    R: AccountRepository + 'static,
    P: PasswordVerifier + 'static,
{
    cfg.route("/register", web::post().to(register::register::<R, P>))
        .route("/login", web::post().to(login::login::<R, P>))
        .service(
            web::scope("")
                .wrap(SessionAuth)
                .route("/user", web::get().to(user::get_user::<R, P>))
                .route("/logout", web::delete().to(logout::logout)),
        );
}
