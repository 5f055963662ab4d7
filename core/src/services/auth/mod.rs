//! Authentication service: registration, login and session verification

pub mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, Session};
