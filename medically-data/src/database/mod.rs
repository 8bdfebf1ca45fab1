use thiserror::Error;

// Database modules
pub mod config;
pub mod connection;
pub mod migrations;
pub mod retry;

// Re-export database connection functions
pub use config::{DatabaseConfig, DatabaseType};
pub use connection::*;
pub use retry::{retry_with_backoff, BackoffPolicy};

/// Errors raised while configuring, connecting to or migrating the database
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Configuration error
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Unsupported database type
    #[error("Unsupported database type: {0}")]
    UnsupportedDatabaseType(String),

    /// Connection error
    #[error("Failed to connect to database: {0}")]
    ConnectionError(String),

    /// Migration error
    #[error("Database migration error: {0}")]
    MigrationError(String),
}

impl From<r2d2::Error> for DatabaseError {
    fn from(error: r2d2::Error) -> Self {
        DatabaseError::ConnectionError(error.to_string())
    }
}

#[cfg(feature = "postgres")]
impl From<deadpool_postgres::PoolError> for DatabaseError {
    fn from(error: deadpool_postgres::PoolError) -> Self {
        DatabaseError::ConnectionError(error.to_string())
    }
}
