//! Credential verification seam.
//!
//! Passwords are only ever handled through an irreversible hash. The concrete
//! hashing scheme lives in the infrastructure layer; the domain depends on
//! this trait alone. Calls may block or suspend (the hash function is
//! deliberately expensive), so the trait is async.

use async_trait::async_trait;

use crate::errors::DomainError;

/// One-way hash-and-compare facility for passwords
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// Hash a plaintext secret into its stored representation
    async fn hash(&self, secret: &str) -> Result<String, DomainError>;

    /// Check a plaintext secret against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; `Err` is reserved for operational
    /// failures (e.g. a corrupt stored hash).
    async fn matches(&self, secret: &str, hash: &str) -> Result<bool, DomainError>;
}
