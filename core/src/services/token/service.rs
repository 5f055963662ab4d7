//! Token codec implementation
//!
//! Issues and validates HS256 JWTs carrying an account id. Access and
//! refresh tokens are signed with distinct keys, so validating a token
//! against the wrong kind fails as `Malformed`. Validation is pure CPU
//! work and safe to run inline on the request path.

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Codec for creating and verifying signed, expiring session tokens
pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token codec
    ///
    /// Fails if either signing key is unset. This is a configuration error
    /// surfaced at startup, never a request error.
    pub fn new(config: TokenConfig) -> Result<Self, DomainError> {
        if config.access_key.trim().is_empty() {
            return Err(DomainError::Internal {
                message: "access token signing key is unset".to_string(),
            });
        }
        if config.refresh_key.trim().is_empty() {
            return Err(DomainError::Internal {
                message: "refresh token signing key is unset".to_string(),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry decisions must be exact; no clock-skew grace window.
        validation.leeway = 0;

        Ok(Self {
            access_encoding: EncodingKey::from_secret(config.access_key.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_key.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_key.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_key.as_bytes()),
            access_lifetime: Duration::minutes(config.access_expiry_minutes),
            refresh_lifetime: Duration::days(config.refresh_expiry_days),
            validation,
        })
    }

    /// Issues a signed token of the given kind for an account
    pub fn issue(&self, kind: TokenKind, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, self.lifetime(kind));
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, self.encoding_key(kind))
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Issues an access/refresh pair encoding the same subject
    pub fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, DomainError> {
        let access_token = self.issue(TokenKind::Access, user_id)?;
        let refresh_token = self.issue(TokenKind::Refresh, user_id)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Validates a token of the given kind and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature verified and not expired
    /// * `Err(TokenError::Expired)` - Signature verified but past expiry
    /// * `Err(TokenError::Malformed)` - Bad signature, wrong key, or
    ///   unparsable structure
    pub fn validate(&self, kind: TokenKind, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, self.decoding_key(kind), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    TokenError::Expired
                } else {
                    TokenError::Malformed
                }
            })
    }

    fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_lifetime,
            TokenKind::Refresh => self.refresh_lifetime,
        }
    }

    fn encoding_key(&self, kind: TokenKind) -> &EncodingKey {
        match kind {
            TokenKind::Access => &self.access_encoding,
            TokenKind::Refresh => &self.refresh_encoding,
        }
    }

    fn decoding_key(&self, kind: TokenKind) -> &DecodingKey {
        match kind {
            TokenKind::Access => &self.access_decoding,
            TokenKind::Refresh => &self.refresh_decoding,
        }
    }
}
