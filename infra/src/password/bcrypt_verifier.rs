//! bcrypt implementation of the PasswordVerifier trait.
//!
//! Hashing is CPU-bound and deliberately slow, so both operations run on
//! the blocking thread pool instead of starving the async executor.

use async_trait::async_trait;
use bcrypt::{hash, verify};

use av_core::errors::DomainError;
use av_core::services::PasswordVerifier;

/// bcrypt work factor; 10 rounds keeps hashing under ~100ms while staying
/// expensive enough for offline attacks
const BCRYPT_COST: u32 = 10;

/// bcrypt-backed password hashing and comparison
#[derive(Clone, Default)]
pub struct BcryptPasswordVerifier;

impl BcryptPasswordVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordVerifier for BcryptPasswordVerifier {
    async fn hash(&self, secret: &str) -> Result<String, DomainError> {
        let secret = secret.to_string();
        tokio::task::spawn_blocking(move || hash(secret, BCRYPT_COST))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })
    }

    async fn matches(&self, secret: &str, hashed: &str) -> Result<bool, DomainError> {
        let secret = secret.to_string();
        let hashed = hashed.to_string();
        tokio::task::spawn_blocking(move || verify(secret, &hashed))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Verification task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let verifier = BcryptPasswordVerifier::new();

        let hashed = verifier.hash("correcthorse").await.unwrap();
        assert_ne!(hashed, "correcthorse");
        assert!(hashed.starts_with("$2"));

        assert!(verifier.matches("correcthorse", &hashed).await.unwrap());
        assert!(!verifier.matches("wrongpassword", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_hashes_differently() {
        let verifier = BcryptPasswordVerifier::new();

        let first = verifier.hash("correcthorse").await.unwrap();
        let second = verifier.hash("correcthorse").await.unwrap();

        // Salted per hash
        assert_ne!(first, second);
        assert!(verifier.matches("correcthorse", &first).await.unwrap());
        assert!(verifier.matches("correcthorse", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_invalid_hash_format() {
        let verifier = BcryptPasswordVerifier::new();
        let result = verifier.matches("secret", "not-a-bcrypt-hash").await;
        assert!(result.is_err());
    }
}
