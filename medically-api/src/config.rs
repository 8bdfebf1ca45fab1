use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use medically_data::database::config::DEFAULT_SQLITE_PATH;
use medically_data::database::{BackoffPolicy, DatabaseConfig, DatabaseType};

/// Command-line options, each with an environment fallback
#[derive(Debug, Clone, Parser)]
#[command(name = "medically-core", version, about = "CRUD service for users, medications, diseases and clinics")]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 6543)]
    pub port: u16,

    /// Database backend
    #[arg(long, env = "DB_TYPE", default_value_t = DatabaseType::default())]
    pub db_type: DatabaseType,

    /// SQLite database file, or `:memory:`
    #[arg(long, env = "DB_SQLITE_PATH", default_value = DEFAULT_SQLITE_PATH)]
    pub sqlite_path: String,

    /// Full PostgreSQL connection string; overrides the individual settings
    #[arg(long, env = "DB_CONNECTION", hide_env_values = true)]
    pub db_url: Option<String>,

    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    #[arg(long, env = "DB_NAME", default_value = "medically")]
    pub db_name: String,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true, hide_default_value = true)]
    pub db_password: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    #[arg(long, env = "DB_TIMEOUT_SECONDS", default_value_t = 30)]
    pub db_timeout_seconds: u64,

    /// Give up connecting after this many seconds; 0 retries forever
    #[arg(long, env = "DB_RETRY_MAX_ELAPSED_SECONDS", default_value_t = 900)]
    pub retry_max_elapsed_seconds: u64,
}

impl Cli {
    /// Address the server binds to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            db_type: self.db_type,
            sqlite_path: self.sqlite_path.clone(),
            connection_string: self.db_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            name: self.db_name.clone(),
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            max_connections: self.db_max_connections,
            timeout_seconds: self.db_timeout_seconds,
        }
    }

    pub fn backoff_policy(&self) -> BackoffPolicy {
        let max_elapsed = match self.retry_max_elapsed_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        BackoffPolicy::default().with_max_elapsed_time(max_elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_map_onto_database_config() {
        let cli = Cli::try_parse_from([
            "medically-core",
            "--port",
            "8080",
            "--sqlite-path",
            ":memory:",
            "--db-max-connections",
            "4",
            "--db-timeout-seconds",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr().port(), 8080);

        let config = cli.database_config();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_zero_max_elapsed_retries_forever() {
        let cli = Cli::try_parse_from(["medically-core", "--retry-max-elapsed-seconds", "0"]).unwrap();
        assert_eq!(cli.backoff_policy().max_elapsed_time, None);

        let cli = Cli::try_parse_from(["medically-core", "--retry-max-elapsed-seconds", "60"]).unwrap();
        assert_eq!(cli.backoff_policy().max_elapsed_time, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_unknown_db_type_is_rejected() {
        let result = Cli::try_parse_from(["medically-core", "--db-type", "oracle"]);
        assert!(result.is_err());
    }
}
