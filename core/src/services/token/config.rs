//! Token codec configuration

use std::fmt;

use av_shared::config::TokenKeys;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token codec
///
/// Holds the per-kind signing keys and lifetimes. Key material is injected
/// explicitly at construction; there is no ambient or global lookup.
#[derive(Clone)]
pub struct TokenConfig {
    /// Secret for signing and verifying access tokens
    pub access_key: String,

    /// Secret for signing and verifying refresh tokens
    pub refresh_key: String,

    /// Access token lifetime in minutes
    pub access_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_expiry_days: i64,
}

impl TokenConfig {
    /// Create a configuration from loaded signing keys with default lifetimes
    pub fn new(keys: TokenKeys) -> Self {
        Self {
            access_key: keys.access_key,
            refresh_key: keys.refresh_key,
            access_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_expiry_minutes = minutes;
        self
    }

    /// Set the refresh token lifetime in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_expiry_days = days;
        self
    }
}

// Contains key material; keep it out of Debug output
impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("access_key", &"<redacted>")
            .field("refresh_key", &"<redacted>")
            .field("access_expiry_minutes", &self.access_expiry_minutes)
            .field("refresh_expiry_days", &self.refresh_expiry_days)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = TokenConfig::new(TokenKeys::new("a", "r"));
        assert_eq!(config.access_expiry_minutes, 30);
        assert_eq!(config.refresh_expiry_days, 7);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TokenConfig::new(TokenKeys::new("a", "r"))
            .with_access_expiry_minutes(5)
            .with_refresh_expiry_days(1);
        assert_eq!(config.access_expiry_minutes, 5);
        assert_eq!(config.refresh_expiry_days, 1);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = TokenConfig::new(TokenKeys::new("top-secret", "other-secret"));
        let output = format!("{:?}", config);
        assert!(!output.contains("top-secret"));
        assert!(!output.contains("other-secret"));
    }
}
