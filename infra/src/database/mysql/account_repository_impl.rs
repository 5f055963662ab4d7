//! MySQL implementation of the AccountRepository trait.
//!
//! Concrete account persistence over SQLx. UUIDs are stored as their
//! canonical string form; emails are stored normalized and carry a unique
//! index, which is the final arbiter against duplicate registrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use av_core::domain::entities::account::Account;
use av_core::errors::{AuthError, DomainError};
use av_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Database {
                message: format!("Failed to get username: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM accounts WHERE email = ?
            ) as account_exists
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check account existence: {}", e),
            })?;

        let exists: i8 = row
            .try_get("account_exists")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get existence result: {}", e),
            })?;

        Ok(exists == 1)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, created_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, username, email, password_hash, created_at
            FROM accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (id, username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // A unique-index violation on email means a concurrent
                // registration won the race.
                if e.as_database_error()
                    .map(|d| d.is_unique_violation())
                    .unwrap_or(false)
                {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                } else {
                    DomainError::Database {
                        message: format!("Failed to create account: {}", e),
                    }
                }
            })?;

        Ok(account)
    }
}
