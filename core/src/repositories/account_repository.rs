//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between the
//! domain and infrastructure layers. Emails passed in are expected to be
//! normalized (trimmed, lowercased) by the caller.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Implementations must provide per-operation atomicity; no cross-operation
/// transaction is assumed. A race between `exists_by_email` and `create` is
/// accepted at this service's scale, but `create` must still refuse a
/// duplicate email.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Check whether an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Find an account by its email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The persisted account
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, account: Account) -> Result<Account, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::mock::MockAccountRepository;
    use super::*;
    use crate::errors::AuthError;

    #[tokio::test]
    async fn test_mock_repository_create_and_find() {
        let repo = MockAccountRepository::new();
        let account = Account::new("alice", "alice@example.com", "hash".to_string());

        let created = repo.create(account.clone()).await.unwrap();
        assert_eq!(created.id, account.id);

        let by_id = repo.find_by_id(account.id).await.unwrap();
        assert_eq!(by_id.unwrap().email, "alice@example.com");

        let by_email = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, account.id);
    }

    #[tokio::test]
    async fn test_mock_repository_duplicate_email() {
        let repo = MockAccountRepository::new();

        repo.create(Account::new("alice", "alice@example.com", "h".to_string()))
            .await
            .unwrap();
        let result = repo
            .create(Account::new("bob", "alice@example.com", "h".to_string()))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::EmailAlreadyRegistered)
        ));
    }

    #[tokio::test]
    async fn test_mock_repository_exists_by_email() {
        let repo = MockAccountRepository::new();
        assert!(!repo.exists_by_email("alice@example.com").await.unwrap());

        repo.create(Account::new("alice", "alice@example.com", "h".to_string()))
            .await
            .unwrap();
        assert!(repo.exists_by_email("alice@example.com").await.unwrap());
    }
}
