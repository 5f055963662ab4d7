//! Repository traits defining the persistence contracts

pub mod account_repository;

pub use account_repository::AccountRepository;
