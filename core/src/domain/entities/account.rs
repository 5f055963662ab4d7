//! Account entity representing a registered user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use av_shared::utils::validation::normalize;

/// A registered account
///
/// Created once at registration and never updated by this service.
/// Identified by email at login and by id thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, generated at creation
    pub id: Uuid,

    /// Display name, lowercased
    pub username: String,

    /// Unique email address, lowercased
    pub email: String,

    /// Irreversible hash of the password; never compared directly
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account with a generated id
    ///
    /// Username and email are normalized to trimmed lowercase so the
    /// unique-email invariant is case-insensitive.
    pub fn new(
        username: impl AsRef<str>,
        email: impl AsRef<str>,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: normalize(username.as_ref()),
            email: normalize(email.as_ref()),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_normalizes_identifiers() {
        let account = Account::new("Alice", " Alice@Example.COM ", "hash".to_string());

        assert_eq!(account.username, "alice");
        assert_eq!(account.email, "alice@example.com");
        assert_eq!(account.password_hash, "hash");
    }

    #[test]
    fn test_new_accounts_get_distinct_ids() {
        let a = Account::new("alice", "alice@example.com", "h".to_string());
        let b = Account::new("alice", "alice@example.com", "h".to_string());
        assert_ne!(a.id, b.id);
    }
}
