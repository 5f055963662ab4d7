//! Cookie-based session middleware for protected endpoints.
//!
//! Reads the `accessToken` and `refreshToken` cookies, verifies the session
//! through the authentication service and injects an [`AuthContext`] into
//! request extensions. When verification silently renewed the access token,
//! the fresh cookie is attached to the outgoing response so the client
//! keeps a valid session without re-authenticating.

use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use av_core::domain::entities::token::ACCESS_TOKEN_EXPIRY_MINUTES;
use av_core::errors::{DomainError, DomainResult};
use av_core::repositories::AccountRepository;
use av_core::services::auth::{AuthService, Session};
use av_core::services::PasswordVerifier;

use crate::handlers::error_handler::ApiError;

/// Access token cookie name
pub const ACCESS_COOKIE: &str = "accessToken";

/// Refresh token cookie name
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Authenticated identity injected into request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// Account id from the verified session
    pub user_id: Uuid,
}

/// Object-safe view of session verification, so the middleware does not
/// need the service's generic parameters
pub trait SessionVerifier: Send + Sync {
    fn verify_session(
        &self,
        identity: Option<Uuid>,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> DomainResult<Session>;
}

impl<R, P> SessionVerifier for AuthService<R, P>
where
    R: AccountRepository,
    P: PasswordVerifier,
{
    fn verify_session(
        &self,
        identity: Option<Uuid>,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> DomainResult<Session> {
        self.authenticate(identity, access_token, refresh_token)
    }
}

/// Build the HttpOnly access cookie carrying a (re)issued token
pub fn access_cookie(token: String) -> Cookie<'static> {
    session_cookie(ACCESS_COOKIE, token, CookieDuration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES))
}

pub(crate) fn session_cookie(
    name: &'static str,
    value: String,
    max_age: CookieDuration,
) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .finish()
}

/// An immediately-expiring cookie, used to clear session state on logout
pub(crate) fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::ZERO)
        .finish()
}

/// Session verification middleware factory
pub struct SessionAuth;

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session verification middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let verifier = req
                .app_data::<web::Data<Arc<dyn SessionVerifier>>>()
                .cloned()
                .ok_or_else(|| {
                    Error::from(ApiError(DomainError::Internal {
                        message: "Session verifier not configured".to_string(),
                    }))
                })?;

            let identity = req.extensions().get::<AuthContext>().map(|ctx| ctx.user_id);
            let access = req.request().cookie(ACCESS_COOKIE).map(|c| c.value().to_string());
            let refresh = req.request().cookie(REFRESH_COOKIE).map(|c| c.value().to_string());

            let session = verifier
                .verify_session(identity, access.as_deref(), refresh.as_deref())
                .map_err(ApiError::from)?;

            req.extensions_mut().insert(AuthContext {
                user_id: session.user_id,
            });
            let renewed = session.renewed_access_token;

            let mut res = service.call(req).await?;

            if let Some(token) = renewed {
                if let Err(e) = res.response_mut().add_cookie(&access_cookie(token)) {
                    log::error!("failed to attach renewed access cookie: {}", e);
                }
            }

            Ok(res)
        })
    }
}

/// Extractor for the authenticated identity set by [`SessionAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_cookie_is_http_only() {
        let cookie = access_cookie("token-value".to_string());
        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_expired_cookie_clears_value() {
        let cookie = expired_cookie(REFRESH_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }
}
