use std::sync::Arc;
use async_trait::async_trait;

use crate::models::{Row, TableDef};
use super::errors::RepositoryError;

/// Capability set every store backend provides.
///
/// All operations touch exactly one table. `values` always follow the order of
/// [`TableDef::columns`].
#[async_trait]
pub trait Store: Send + Sync + std::fmt::Debug {
    /// All rows of a serial-keyed table, ordered by id
    async fn find_all(&self, table: &'static TableDef) -> Result<Vec<Row>, RepositoryError>;

    /// The row with `id`, or [`RepositoryError::NotFound`]
    async fn find(&self, table: &'static TableDef, id: i64) -> Result<Row, RepositoryError>;

    /// Insert a new row; the store assigns the id
    async fn create(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<Row, RepositoryError>;

    /// Overwrite every column of the row with `row.id`.
    /// Fails with [`RepositoryError::NotFound`] when no such row exists.
    async fn save(&self, table: &'static TableDef, row: Row) -> Result<Row, RepositoryError>;

    /// Delete the row with `id`, returning the number of rows affected
    async fn delete(&self, table: &'static TableDef, id: i64) -> Result<u64, RepositoryError>;

    /// Insert into a naturally keyed table, overwriting the row on key conflict
    async fn upsert(&self, table: &'static TableDef, values: Vec<Option<String>>) -> Result<(), RepositoryError>;

    /// Number of rows in `table`
    async fn count(&self, table: &'static TableDef) -> Result<i64, RepositoryError>;
}

/// Shared store handle injected into services
pub type SharedStore = Arc<dyn Store>;

/// Store fakes for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// A store whose every operation fails with the configured error
    #[derive(Debug, Clone)]
    pub struct FailingStore {
        error: RepositoryError,
    }

    impl FailingStore {
        /// Fail every call with `error`
        pub fn new(error: RepositoryError) -> Self {
            Self { error }
        }

        /// Simulate a database that went away
        pub fn unavailable() -> Self {
            Self::new(RepositoryError::Unavailable("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl Store for FailingStore {
        async fn find_all(&self, _table: &'static TableDef) -> Result<Vec<Row>, RepositoryError> {
            Err(self.error.clone())
        }

        async fn find(&self, _table: &'static TableDef, _id: i64) -> Result<Row, RepositoryError> {
            Err(self.error.clone())
        }

        async fn create(&self, _table: &'static TableDef, _values: Vec<Option<String>>) -> Result<Row, RepositoryError> {
            Err(self.error.clone())
        }

        async fn save(&self, _table: &'static TableDef, _row: Row) -> Result<Row, RepositoryError> {
            Err(self.error.clone())
        }

        async fn delete(&self, _table: &'static TableDef, _id: i64) -> Result<u64, RepositoryError> {
            Err(self.error.clone())
        }

        async fn upsert(&self, _table: &'static TableDef, _values: Vec<Option<String>>) -> Result<(), RepositoryError> {
            Err(self.error.clone())
        }

        async fn count(&self, _table: &'static TableDef) -> Result<i64, RepositoryError> {
            Err(self.error.clone())
        }
    }
}
