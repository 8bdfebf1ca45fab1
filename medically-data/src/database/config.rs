use std::fmt;
use std::str::FromStr;

use super::DatabaseError;

/// Path used for the on-disk SQLite database when none is configured
pub const DEFAULT_SQLITE_PATH: &str = "data/medically.db";

/// SQLite path selecting a private in-memory database
pub const SQLITE_MEMORY: &str = ":memory:";

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// SQLite database (file-based)
    #[cfg(feature = "sqlite")]
    Sqlite,
    /// PostgreSQL database
    #[cfg(feature = "postgres")]
    PostgreSQL,
}

impl Default for DatabaseType {
    #[cfg(feature = "sqlite")]
    fn default() -> Self {
        DatabaseType::Sqlite
    }

    #[cfg(not(feature = "sqlite"))]
    fn default() -> Self {
        DatabaseType::PostgreSQL
    }
}

impl FromStr for DatabaseType {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            #[cfg(feature = "sqlite")]
            "sqlite" => Ok(DatabaseType::Sqlite),
            #[cfg(feature = "postgres")]
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSQL),
            _ => Err(DatabaseError::UnsupportedDatabaseType(s.to_string())),
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => "sqlite",
            #[cfg(feature = "postgres")]
            DatabaseType::PostgreSQL => "postgres",
        };
        f.write_str(name)
    }
}

/// Database configuration
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database type (sqlite, postgres)
    pub db_type: DatabaseType,
    /// Path to the SQLite database file, or `:memory:`
    pub sqlite_path: String,
    /// Full PostgreSQL connection string; overrides the individual parts below
    pub connection_string: Option<String>,
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// PostgreSQL database name
    pub name: String,
    /// PostgreSQL user
    pub user: String,
    /// PostgreSQL password
    pub password: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DatabaseType::default(),
            sqlite_path: DEFAULT_SQLITE_PATH.to_string(),
            connection_string: None,
            host: "localhost".to_string(),
            port: 5432,
            name: "medically".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            max_connections: 10,
            timeout_seconds: 30,
        }
    }
}

// Hand-written so the password never reaches the logs
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("db_type", &self.db_type)
            .field("sqlite_path", &self.sqlite_path)
            .field("connection_string", &self.connection_string.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("max_connections", &self.max_connections)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl DatabaseConfig {
    /// In-memory SQLite configuration, used by tests
    #[cfg(feature = "sqlite")]
    pub fn sqlite_in_memory() -> Self {
        Self {
            db_type: DatabaseType::Sqlite,
            sqlite_path: SQLITE_MEMORY.to_string(),
            ..Self::default()
        }
    }

    /// Whether the SQLite path selects an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.sqlite_path == SQLITE_MEMORY
    }

    /// PostgreSQL connection string in `key=value` form
    pub fn postgres_connection_string(&self) -> String {
        if let Some(ref connection_string) = self.connection_string {
            return connection_string.clone();
        }

        let mut parts = vec![
            format!("host={}", quote_value(&self.host)),
            format!("port={}", self.port),
            format!("dbname={}", quote_value(&self.name)),
            format!("user={}", quote_value(&self.user)),
        ];
        if !self.password.is_empty() {
            parts.push(format!("password={}", quote_value(&self.password)));
        }
        parts.push(format!("connect_timeout={}", self.timeout_seconds));
        parts.join(" ")
    }
}

// libpq quoting: single quotes, with `\` and `'` backslash-escaped
fn quote_value(value: &str) -> String {
    if !value.is_empty() && !value.contains(|c: char| c.is_whitespace() || c == '\'' || c == '\\') {
        return value.to_string();
    }
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
