//! Error-to-response mapping for the HTTP boundary

pub mod error_handler;

pub use error_handler::{validation_failure, ApiError};
