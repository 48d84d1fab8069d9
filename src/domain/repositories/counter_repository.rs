//! Repository trait for shared counter range reservation.

use crate::error::AppError;
use async_trait::async_trait;

/// Durable, shared counter that hands out disjoint ID ranges.
///
/// Each call reserves `size` consecutive IDs and returns the first one.
/// Reservations must be atomic so that concurrent instances never receive
/// overlapping ranges.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCounterRepository`] - PostgreSQL row
///   with an atomic `UPDATE ... RETURNING`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Reserves `size` consecutive counter values and returns the start of the range.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn reserve_range(&self, size: i64) -> Result<i64, AppError>;
}
