//! Infrastructure layer for the AccountVault server
//!
//! Concrete implementations of the abstractions defined in `av_core`:
//! - MySQL persistence via SQLx (`database`)
//! - bcrypt password hashing (`password`)

pub mod database;
pub mod password;

pub use database::connection::DatabasePool;
pub use database::mysql::MySqlAccountRepository;
pub use password::BcryptPasswordVerifier;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
