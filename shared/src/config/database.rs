//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// Database configuration for the MySQL connection pool
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl DatabaseConfig {
    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            connect_timeout: 30,
        }
    }

    /// Load from environment variables; `APP_DB_URI` is required
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = require_var("APP_DB_URI")?;
        let max_connections = std::env::var("APP_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidVariable {
                name: "APP_DB_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?;

        Ok(Self {
            url,
            max_connections,
            connect_timeout: 30,
        })
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}
