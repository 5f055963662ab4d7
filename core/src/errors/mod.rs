//! Domain-specific error types and error handling.
//!
//! Authentication rejections and token failures are modeled as enum variants
//! so callers branch on kind instead of matching message strings. The
//! presentation layer maps each variant to a stable error code and HTTP
//! status.

use thiserror::Error;

/// Authentication-related errors
///
/// `InvalidCredentials` deliberately covers wrong email, wrong password and
/// malformed tokens alike, so a caller cannot probe which part failed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session expired. Please login.")]
    SessionExpired,

    #[error("No session credentials were presented")]
    MissingCredentials,

    #[error("Looks like you've already registered. Try logging in instead?")]
    EmailAlreadyRegistered,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Signature verified but the embedded expiry has passed
    #[error("Token expired")]
    Expired,

    /// Bad signature, wrong signing key, or unparsable structure
    #[error("Malformed token")]
    Malformed,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages_are_user_facing() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AuthError::SessionExpired.to_string(),
            "Session expired. Please login."
        );
    }

    #[test]
    fn test_token_error_bridges_into_domain_error() {
        let err: DomainError = TokenError::Expired.into();
        assert!(matches!(err, DomainError::Token(TokenError::Expired)));
    }
}
