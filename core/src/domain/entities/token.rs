//! Token entities for JWT-based sessions.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// The two kinds of session token
///
/// Each kind is signed with its own key and carries its own lifetime, so an
/// access token can never validate as a refresh token or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived credential proving recent authentication
    Access,
    /// Long-lived credential used solely to mint a new access token
    Refresh,
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a token expiring after `lifetime`
    pub fn new(user_id: Uuid, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        }
    }

    /// Gets the account id embedded in the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token pair issued at login
///
/// Invariant: both tokens encode the same subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_embed_subject_and_expiry() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES));

        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_invalid_subject_fails_parsing() {
        let mut claims = Claims::new(Uuid::new_v4(), Duration::minutes(1));
        claims.sub = "not-a-uuid".to_string();

        assert!(claims.user_id().is_err());
    }

    #[test]
    fn test_claims_serialization_round_trip() {
        let claims = Claims::new(Uuid::new_v4(), Duration::minutes(30));
        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
