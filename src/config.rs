//! Configuration Module
//!
//! Handles loading server and database configuration from environment variables.

use std::env;
use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::{Result, StudentError};
use crate::operations::OperationSet;

/// Database dialects the service can connect to.
const SUPPORTED_DIALECTS: [&str; 2] = ["postgres", "postgresql"];

/// Database connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database dialect (`DIALECT`)
    pub dialect: String,
    /// Database host (`HOST`)
    pub host: String,
    /// Database port (`DBPORT`)
    pub port: u16,
    /// Database user (`USER`)
    pub user: String,
    /// Database name (`NAME`)
    pub name: String,
    /// Database password (`PASSWORD`)
    pub password: String,
}

impl DatabaseConfig {
    /// Builds Postgres connect options. TLS is always disabled.
    ///
    /// Fails when the dialect is not a Postgres one.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        let dialect = self.dialect.to_ascii_lowercase();
        if !SUPPORTED_DIALECTS.contains(&dialect.as_str()) {
            return Err(StudentError::Config(format!(
                "Unsupported database dialect '{}'",
                self.dialect
            )));
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name)
            .password(&self.password)
            .ssl_mode(PgSslMode::Disable))
    }
}

// Password never reaches the logs
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("dialect", &self.dialect)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}@{}:{}/{}",
            self.dialect, self.user, self.host, self.port, self.name
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dialect: "postgres".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            name: "postgres".to_string(),
            password: String::new(),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection parameters
    pub database: DatabaseConfig,
    /// HTTP server port
    pub server_port: u16,
    /// Operations mounted on the router
    pub operations: OperationSet,
    /// Whether Swagger UI is served under `/swagger`
    pub docs_enabled: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DIALECT` - Database dialect (default: postgres)
    /// - `HOST` - Database host (default: localhost)
    /// - `DBPORT` - Database port (default: 5432)
    /// - `USER` - Database user (default: postgres)
    /// - `NAME` - Database name (default: postgres)
    /// - `PASSWORD` - Database password (default: empty)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `OPERATIONS` - Comma-separated enabled operations (default: all)
    /// - `ENABLE_DOCS` - Serve Swagger UI (default: true)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let string_or = |key: &str, default: String| lookup(key).unwrap_or(default);

        let database = DatabaseConfig {
            dialect: string_or("DIALECT", defaults.database.dialect),
            host: string_or("HOST", defaults.database.host),
            port: lookup("DBPORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.database.port),
            user: string_or("USER", defaults.database.user),
            name: string_or("NAME", defaults.database.name),
            password: string_or("PASSWORD", defaults.database.password),
        };

        let operations = match lookup("OPERATIONS") {
            Some(value) => value.parse()?,
            None => defaults.operations,
        };

        Ok(Self {
            database,
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            operations,
            docs_enabled: lookup("ENABLE_DOCS")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.docs_enabled),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            server_port: 8080,
            operations: OperationSet::all(),
            docs_enabled: true,
        }
    }
}
