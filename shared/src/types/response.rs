//! Response structures for the HTTP boundary
//!
//! Every user-visible failure carries a stable error code plus a
//! human-readable message. Internal causes are never serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Simple acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("INVALID_CREDENTIALS", "Invalid credentials");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "INVALID_CREDENTIALS");
        assert_eq!(json["message"], "Invalid credentials");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_message_response() {
        let response = MessageResponse::new("Logout successful");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("Logout successful"));
    }
}
