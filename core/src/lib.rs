//! Core business logic and domain layer for the AccountVault backend
//!
//! This crate contains the domain entities, error taxonomy, repository
//! contracts and the services implementing registration, login and the
//! access/refresh session state machine. It performs no I/O of its own;
//! persistence and password hashing are reached through traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
