//! visitorreg-server: visitor registration over HTTP
//!
//! Accepts a name and email, validates both, rejects already-registered
//! emails, and persists a row to the `visitors` table.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod registrar;

pub use config::{ConfigError, DatabaseConfig, CONNECTION_STRING_VAR};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use registrar::{MemoryRegistrar, PgRegistrar, Registrar, StorageError};
