//! Postgres registrar
//!
//! Each operation acquires its own pooled connection; the guard returns it
//! to the pool on every exit path.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::{Registrar, StorageError};
use crate::config::DatabaseConfig;
use crate::db::create_pool;
use crate::models::{NewVisitor, Visitor};

/// Registrar backed by the `visitors` table
#[derive(Clone)]
pub struct PgRegistrar {
    pool: PgPool,
}

impl PgRegistrar {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the pool from configuration. Does not open a connection.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        Ok(Self::new(create_pool(config)?))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn count_by_email(&self, email: &str) -> Result<i64, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(1) FROM visitors WHERE email = $1")
            .bind(email)
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl Registrar for PgRegistrar {
    async fn exists(&self, email: &str) -> bool {
        match self.count_by_email(email).await {
            Ok(count) => count > 0,
            Err(e) => {
                tracing::error!(error = %e, email, "existence check failed, treating as not registered");
                false
            }
        }
    }

    async fn insert(&self, visitor: &NewVisitor) -> Result<Visitor, StorageError> {
        let registered_at = Utc::now();
        let mut conn = self.pool.acquire().await?;

        // registered_at is a `timestamp` column: bind naive UTC
        let result = sqlx::query(
            r#"
            INSERT INTO visitors (name, email, registered_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(visitor.name.as_str())
        .bind(visitor.email.as_str())
        .bind(registered_at.naive_utc())
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() != 1 {
            return Err(StorageError::RowsAffected(result.rows_affected()));
        }

        tracing::debug!(email = %visitor.email, "visitor row inserted");
        Ok(Visitor::registered(visitor, registered_at))
    }
}
