//! Core services: token codec, credential verification seam, and the
//! authentication service.

pub mod auth;
pub mod password;
pub mod token;

pub use auth::{AuthService, Session};
pub use password::PasswordVerifier;
pub use token::{TokenConfig, TokenService};
