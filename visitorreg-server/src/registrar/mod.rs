//! Registrar trait and implementations
//!
//! Provides a trait for the visitor store, with:
//! - Postgres implementation using a sqlx pool
//! - In-memory implementation for testing
//!
//! The existence check and the insert are separate operations. Two concurrent
//! registrations for the same email can both pass `exists` and both insert;
//! only a UNIQUE index on `visitors(email)` closes that window.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{NewVisitor, Visitor};

pub use memory::MemoryRegistrar;
pub use postgres::PgRegistrar;

/// Storage error, logged and never sent to the client
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("insert affected {0} rows, expected 1")]
    RowsAffected(u64),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Visitor store seam (testable)
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Whether a visitor with exactly this (lower-cased) email is stored.
    ///
    /// Fail-open: a storage failure is logged and reported as `false`, so an
    /// outage can let a duplicate through rather than block registration.
    async fn exists(&self, email: &str) -> bool;

    /// Insert one row stamped with the current UTC time.
    async fn insert(&self, visitor: &NewVisitor) -> Result<Visitor, StorageError>;
}
