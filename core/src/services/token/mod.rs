//! Token codec: issuing and validating signed, expiring session tokens

pub mod config;
pub mod service;

pub use config::TokenConfig;
pub use service::TokenService;
