//! Configuration module with business-specific sub-modules
//!
//! Every required setting is read once at startup; a missing or malformed
//! variable is a fatal startup error, never a request-time error.

pub mod auth;
pub mod database;
pub mod server;

use thiserror::Error;

// Re-export commonly used types
pub use auth::TokenKeys;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Errors raised while loading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {name} is undefined")]
    MissingVariable { name: &'static str },

    #[error("Environment variable {name} has an invalid value: {reason}")]
    InvalidVariable { name: &'static str, reason: String },
}

/// Read a required environment variable
pub(crate) fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable { name }),
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing keys
    pub token_keys: TokenKeys,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            token_keys: TokenKeys::from_env()?,
        })
    }
}
