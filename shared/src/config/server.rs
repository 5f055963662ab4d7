//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load from environment variables; `APP_PORT` is required
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = require_var("APP_PORT")?
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidVariable {
                name: "APP_PORT",
                reason: e.to_string(),
            })?;

        Ok(Self { host, port })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("localhost", 3000);
        assert_eq!(config.bind_address(), "localhost:3000");
    }
}
