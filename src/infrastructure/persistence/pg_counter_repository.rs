//! PostgreSQL implementation of the shared counter.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Shared counter backed by a single row in the `id_counter` table.
///
/// Range reservation is a single atomic `UPDATE ... RETURNING`, so concurrent
/// service instances always receive disjoint ranges.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

impl PgCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn reserve_range(&self, size: i64) -> Result<i64, AppError> {
        let start: i64 = sqlx::query_scalar(
            r#"
            UPDATE id_counter
            SET value = value + $1
            WHERE id = 1
            RETURNING value - $1
            "#,
        )
        .bind(size)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(start)
    }
}
