//! Token signing key configuration
//!
//! Access and refresh tokens are signed with distinct keys so that one kind
//! can never validate as the other. Key material is supplied out-of-band via
//! environment variables and is never logged or echoed.

use std::fmt;

use super::{require_var, ConfigError};

/// Environment variable holding the access-token signing key
pub const ACCESS_TOKEN_KEY_VAR: &str = "APP_ACCESS_TOKEN_KEY";

/// Environment variable holding the refresh-token signing key
pub const REFRESH_TOKEN_KEY_VAR: &str = "APP_REFRESH_TOKEN_KEY";

/// Signing keys for the two token kinds
#[derive(Clone)]
pub struct TokenKeys {
    /// Secret for signing and verifying access tokens
    pub access_key: String,

    /// Secret for signing and verifying refresh tokens
    pub refresh_key: String,
}

impl TokenKeys {
    /// Create a new key pair
    pub fn new(access_key: impl Into<String>, refresh_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            refresh_key: refresh_key.into(),
        }
    }

    /// Load both keys from the environment; absence of either is fatal
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            access_key: require_var("APP_ACCESS_TOKEN_KEY")?,
            refresh_key: require_var("APP_REFRESH_TOKEN_KEY")?,
        })
    }
}

// Key material must never leak through Debug output
impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("access_key", &"<redacted>")
            .field("refresh_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key_material() {
        let keys = TokenKeys::new("access-secret", "refresh-secret");
        let output = format!("{:?}", keys);
        assert!(!output.contains("access-secret"));
        assert!(!output.contains("refresh-secret"));
        assert!(output.contains("<redacted>"));
    }

    #[test]
    fn test_keys_are_distinct_fields() {
        let keys = TokenKeys::new("a", "r");
        assert_eq!(keys.access_key, "a");
        assert_eq!(keys.refresh_key, "r");
    }
}
