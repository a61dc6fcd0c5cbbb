//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool connects
//! lazily: nothing is opened until the first request needs a connection.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed. Connection
/// failures surface later, per operation.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = create_pool(&config)?;
/// ```
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.connection_string)
}
