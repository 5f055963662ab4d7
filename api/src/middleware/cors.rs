//! CORS configuration for browser clients.
//!
//! Cookie-based sessions need `Access-Control-Allow-Credentials`, which
//! rules out a wildcard origin. When `APP_CORS_ORIGIN` is set the policy
//! allows exactly that origin with credentials; otherwise a permissive
//! no-credentials default is used for local development.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

pub fn create_cors() -> Cors {
    let methods = vec![
        Method::GET,
        Method::POST,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = vec![header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN];

    match env::var("APP_CORS_ORIGIN") {
        Ok(origin) if !origin.trim().is_empty() => {
            log::info!("CORS restricted to origin: {}", origin);
            Cors::default()
                .allowed_origin(origin.trim())
                .allowed_methods(methods)
                .allowed_headers(headers)
                .supports_credentials()
                .max_age(3600)
        }
        _ => {
            log::info!("CORS using permissive development policy");
            Cors::default()
                .allow_any_origin()
                .allowed_methods(methods)
                .allowed_headers(headers)
                .max_age(3600)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_with_configured_origin() {
        env::set_var("APP_CORS_ORIGIN", "https://app.example.com");
        let _cors = create_cors();
        env::remove_var("APP_CORS_ORIGIN");
    }

    #[test]
    fn test_create_cors_default() {
        env::remove_var("APP_CORS_ORIGIN");
        let _cors = create_cors();
    }
}
