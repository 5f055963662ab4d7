//! Shared utilities and common types for the AccountVault server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response structures for the HTTP boundary
//! - Validation helpers for account fields

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig, TokenKeys};
pub use types::{ErrorResponse, MessageResponse};
pub use utils::validation;
