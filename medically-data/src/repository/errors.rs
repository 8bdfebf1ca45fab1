use std::sync::PoisonError;
use thiserror::Error;

/// Error type for store operations.
///
/// Driver errors are classified here so callers can tell a missing row from a
/// rejected write or an unreachable database. The message is the driver's text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No row matched the requested key
    #[error("{0}")]
    NotFound(String),

    /// The database rejected the write (NOT NULL, UNIQUE, CHECK, ...)
    #[error("{0}")]
    ConstraintViolation(String),

    /// The database or its pool could not be reached
    #[error("{0}")]
    Unavailable(String),

    /// Anything the classification does not recognise
    #[error("{0}")]
    Unknown(String),
}

impl RepositoryError {
    /// Not-found error for a missing row in `table`
    pub fn row_not_found(table: &str, id: i64) -> Self {
        RepositoryError::NotFound(format!("record not found: {} id={}", table, id))
    }

    /// Whether this is the not-found case
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Unknown(format!("lock poisoned: {}", error))
    }
}

impl From<r2d2::Error> for RepositoryError {
    fn from(error: r2d2::Error) -> Self {
        RepositoryError::Unavailable(error.to_string())
    }
}

impl From<tokio::task::JoinError> for RepositoryError {
    fn from(error: tokio::task::JoinError) -> Self {
        RepositoryError::Unknown(format!("store task failed: {}", error))
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for RepositoryError {
    fn from(error: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        let message = error.to_string();
        match &error {
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound(message),
            rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
                ErrorCode::ConstraintViolation => RepositoryError::ConstraintViolation(message),
                ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure => RepositoryError::Unavailable(message),
                _ => RepositoryError::Unknown(message),
            },
            _ => RepositoryError::Unknown(message),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for RepositoryError {
    fn from(error: tokio_postgres::Error) -> Self {
        if error.is_closed() {
            return RepositoryError::Unavailable(error.to_string());
        }

        match error.as_db_error() {
            // Class 23: integrity constraint violation
            Some(db_error) if db_error.code().code().starts_with("23") => {
                RepositoryError::ConstraintViolation(db_error.message().to_string())
            }
            // Class 08: connection exception
            Some(db_error) if db_error.code().code().starts_with("08") => {
                RepositoryError::Unavailable(db_error.message().to_string())
            }
            Some(db_error) => RepositoryError::Unknown(db_error.message().to_string()),
            None => RepositoryError::Unknown(error.to_string()),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<deadpool_postgres::PoolError> for RepositoryError {
    fn from(error: deadpool_postgres::PoolError) -> Self {
        RepositoryError::Unavailable(error.to_string())
    }
}
