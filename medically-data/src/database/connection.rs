//! Database connectivity for the medically-core service.
//!
//! Supported backends:
//! - SQLite (default)
//! - PostgreSQL (optional)
//!
//! [`bootstrap`] is the entry point: it retries the initial connection with
//! exponential backoff and then brings the schema up to date.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::config::{DatabaseConfig, DatabaseType};
use super::retry::{retry_with_backoff, BackoffPolicy};
use super::DatabaseError;
use crate::repository::SharedStore;

/// Database connection pool enum for different database types
#[derive(Debug, Clone)]
pub enum DatabasePool {
    /// SQLite connection pool
    #[cfg(feature = "sqlite")]
    SQLite(Arc<crate::repository::SqlitePool>),

    /// PostgreSQL connection pool
    #[cfg(feature = "postgres")]
    PostgreSQL(Arc<deadpool_postgres::Pool>),
}

impl DatabasePool {
    /// Wrap the pool in the matching [`Store`](crate::repository::Store)
    pub fn into_store(self) -> SharedStore {
        match self {
            #[cfg(feature = "sqlite")]
            DatabasePool::SQLite(pool) => Arc::new(crate::repository::SqliteStore::new(pool)),
            #[cfg(feature = "postgres")]
            DatabasePool::PostgreSQL(pool) => Arc::new(crate::repository::PostgresStore::new(pool)),
        }
    }

    /// Human-readable summary of the pool, safe to log
    pub fn connection_info(&self) -> String {
        match self {
            #[cfg(feature = "sqlite")]
            DatabasePool::SQLite(pool) => {
                let state = pool.state();
                format!("SQLite (connections: {}, idle: {})", state.connections, state.idle_connections)
            }
            #[cfg(feature = "postgres")]
            DatabasePool::PostgreSQL(pool) => {
                let status = pool.status();
                format!("PostgreSQL (size: {}, available: {})", status.size, status.available)
            }
        }
    }
}

/// Connect, retrying with `policy`, then run migrations.
///
/// Configuration errors fail immediately; only connection failures are retried.
pub async fn bootstrap(config: &DatabaseConfig, policy: &BackoffPolicy) -> Result<DatabasePool, DatabaseError> {
    info!("Initializing database with type: {}", config.db_type);
    validate_config(config)?;

    let pool = retry_with_backoff(policy, "Database connection", || connect(config)).await?;
    run_migrations(&pool).await?;

    info!("Database ready: {}", pool.connection_info());
    Ok(pool)
}

/// Open a pool and check that one connection can be made
pub async fn connect(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    match config.db_type {
        #[cfg(feature = "sqlite")]
        DatabaseType::Sqlite => connect_sqlite(config),
        #[cfg(feature = "postgres")]
        DatabaseType::PostgreSQL => connect_postgres(config).await,
    }
}

/// Bring the schema up to date
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    match pool {
        #[cfg(feature = "sqlite")]
        DatabasePool::SQLite(pool) => {
            let conn = pool.get()?;
            super::migrations::run_sqlite_migrations(&conn)
        }
        #[cfg(feature = "postgres")]
        DatabasePool::PostgreSQL(pool) => {
            let client = pool.get().await?;
            super::migrations::run_postgres_migrations(&client).await
        }
    }
}

fn validate_config(config: &DatabaseConfig) -> Result<(), DatabaseError> {
    if config.max_connections == 0 {
        return Err(DatabaseError::ConfigError("max_connections must be at least 1".to_string()));
    }

    match config.db_type {
        #[cfg(feature = "sqlite")]
        DatabaseType::Sqlite => {
            if config.sqlite_path.trim().is_empty() {
                return Err(DatabaseError::ConfigError("SQLite path is empty".to_string()));
            }
            Ok(())
        }
        #[cfg(feature = "postgres")]
        DatabaseType::PostgreSQL => postgres_config(config).map(|_| ()),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    use r2d2_sqlite::SqliteConnectionManager;
    use rusqlite::OpenFlags;
    use std::fs;
    use std::path::Path;

    let timeout = Duration::from_secs(config.timeout_seconds);

    // Every connection to `:memory:` opens a fresh database, so the pool holds exactly one
    let (manager, max_size) = if config.is_in_memory() {
        info!("Initializing in-memory SQLite database");
        (SqliteConnectionManager::memory(), 1)
    } else {
        info!("Initializing SQLite database at: {}", config.sqlite_path);

        if let Some(parent) = Path::new(&config.sqlite_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::ConnectionError(format!("Failed to create directory {:?}: {}", parent, e))
                })?;
            }
        }

        let manager = SqliteConnectionManager::file(&config.sqlite_path)
            .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE);
        (manager, config.max_connections)
    };

    let manager = manager.with_init(move |conn| conn.busy_timeout(timeout));

    let mut builder = r2d2::Pool::builder().max_size(max_size).connection_timeout(timeout);
    if config.is_in_memory() {
        // A replacement connection would open an empty database
        builder = builder.idle_timeout(None).max_lifetime(None);
    }
    let pool = builder.build(manager)?;

    // Test connection to make sure it works
    let conn = pool.get()?;
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;
    drop(conn);

    info!("SQLite connection pool created successfully");
    Ok(DatabasePool::SQLite(Arc::new(pool)))
}

#[cfg(feature = "postgres")]
fn postgres_config(config: &DatabaseConfig) -> Result<tokio_postgres::Config, DatabaseError> {
    config
        .postgres_connection_string()
        .parse::<tokio_postgres::Config>()
        .map_err(|e| DatabaseError::ConfigError(format!("Invalid PostgreSQL connection string: {}", e)))
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
    use tokio_postgres::NoTls;

    let mut pg_config = postgres_config(config)?;
    if pg_config.get_connect_timeout().is_none() {
        pg_config.connect_timeout(Duration::from_secs(config.timeout_seconds));
    }
    if pg_config.get_hosts().is_empty() {
        tracing::warn!("No PostgreSQL host configured, falling back to localhost");
        pg_config.host("localhost");
    }

    info!("Initializing PostgreSQL pool (max_connections={})", config.max_connections);

    let manager = Manager::from_config(
        pg_config,
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );
    let pool = Pool::builder(manager)
        .max_size(config.max_connections as usize)
        .build()
        .map_err(|e| DatabaseError::ConfigError(format!("Failed to build PostgreSQL pool: {}", e)))?;

    // Test connection to make sure it works
    let client = pool.get().await?;
    client
        .simple_query("SELECT 1")
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;
    drop(client);

    info!("PostgreSQL connection pool created successfully");
    Ok(DatabasePool::PostgreSQL(Arc::new(pool)))
}
