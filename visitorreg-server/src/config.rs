//! Database configuration
//!
//! The connection string is the only required setting. A missing or blank
//! value is a startup error; callers are expected to exit.

use std::fmt;
use std::time::Duration;

/// Environment variable holding the PostgreSQL connection string
pub const CONNECTION_STRING_VAR: &str = "POSTGRESQL_CONNECTION_STRING";

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a pooled connection before failing.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} environment variable is not set")]
    Missing { var: &'static str },
}

/// Connection settings for the visitors store
#[derive(Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Build a config from a connection string, rejecting blank values.
    pub fn new(connection_string: impl Into<String>) -> Result<Self, ConfigError> {
        let connection_string = connection_string.into();
        if connection_string.trim().is_empty() {
            return Err(ConfigError::Missing {
                var: CONNECTION_STRING_VAR,
            });
        }

        Ok(Self {
            connection_string,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        })
    }

    /// Build a config from an optional value (CLI flag or env lookup).
    pub fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(s) => Self::new(s),
            None => Err(ConfigError::Missing {
                var: CONNECTION_STRING_VAR,
            }),
        }
    }

    /// Read `POSTGRESQL_CONNECTION_STRING` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(CONNECTION_STRING_VAR).ok())
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, acquire_timeout: Duration) -> Self {
        self.acquire_timeout = acquire_timeout;
        self
    }
}

// Connection strings carry credentials
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("connection_string", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}
