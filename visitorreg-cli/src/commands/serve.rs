//! HTTP server command for visitor registration
//!
//! Builds the Postgres registrar from configuration and serves the router.
//! A missing connection string stops the process before any socket is bound.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use visitorreg_server::{run_server, DatabaseConfig, PgRegistrar, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "VISITORREG_BIND", default_value = "127.0.0.1:7071")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "POSTGRESQL_CONNECTION_STRING", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "VISITORREG_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig::from_value(args.database_url)
        .context("Set it via --database-url, the environment, or a .env file")?
        .with_max_connections(args.max_connections);

    tracing::info!(config = ?db_config, "Starting visitorreg server on {}", args.bind);

    let registrar = PgRegistrar::connect(&db_config).context("Invalid database connection string")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(Arc::new(registrar), config)
        .await
        .context("Server error")?;

    Ok(())
}
