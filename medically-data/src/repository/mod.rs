// Repository module structure
pub mod errors;
pub mod sql;
mod in_memory;
mod store;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "postgres")]
mod postgres;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryStore;
pub use store::{SharedStore, Store};

#[cfg(feature = "sqlite")]
pub use sqlite::{SqlitePool, SqliteStore};

#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

// Re-export store fakes for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use store::tests;
