//! In-memory registrar for tests and local runs
//!
//! Like the `visitors` table it has no uniqueness constraint. Failure
//! switches simulate an unreachable store.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{Registrar, StorageError};
use crate::models::{NewVisitor, Visitor};

#[derive(Default)]
pub struct MemoryRegistrar {
    visitors: Mutex<Vec<Visitor>>,
    fail_exists: AtomicBool,
    fail_insert: AtomicBool,
}

impl MemoryRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent existence checks hit a storage failure.
    pub fn fail_exists(&self, fail: bool) {
        self.fail_exists.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent inserts hit a storage failure.
    pub fn fail_insert(&self, fail: bool) {
        self.fail_insert.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of stored rows in insertion order.
    pub async fn visitors(&self) -> Vec<Visitor> {
        self.visitors.lock().await.clone()
    }
}

#[async_trait]
impl Registrar for MemoryRegistrar {
    async fn exists(&self, email: &str) -> bool {
        if self.fail_exists.load(Ordering::SeqCst) {
            tracing::error!(email, "existence check failed, treating as not registered");
            return false;
        }

        self.visitors.lock().await.iter().any(|v| v.email == email)
    }

    async fn insert(&self, visitor: &NewVisitor) -> Result<Visitor, StorageError> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("insert switched off".into()));
        }

        let row = Visitor::registered(visitor, Utc::now());
        self.visitors.lock().await.push(row.clone());
        Ok(row)
    }
}
