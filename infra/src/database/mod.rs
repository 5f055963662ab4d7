//! Database connectivity and repository implementations

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlAccountRepository;
