//! In-process counter range allocator.
//!
//! Short codes are derived from sequential IDs. To avoid a database round trip
//! per shortened URL, the allocator reserves a block of IDs at a time from the
//! shared durable counter and hands them out from memory until the block is
//! exhausted.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Currently held ID range. `next == end` means exhausted.
#[derive(Debug, Default)]
struct RangeState {
    next: i64,
    end: i64,
}

/// Hands out unique sequential IDs, reserving ranges from a [`CounterRepository`].
///
/// IDs within a reserved range are served from memory under a mutex, so
/// concurrent requests on one instance never observe the same ID. Separate
/// service instances are isolated by the atomicity of the underlying
/// reservation.
pub struct CounterRange<C: CounterRepository> {
    repository: Arc<C>,
    range_size: i64,
    state: Mutex<RangeState>,
}

impl<C: CounterRepository> CounterRange<C> {
    /// Creates an allocator that reserves `range_size` IDs per round trip.
    ///
    /// The first range is reserved lazily on the first [`Self::next_id`] call.
    pub fn new(repository: Arc<C>, range_size: i64) -> Self {
        Self {
            repository,
            range_size,
            state: Mutex::new(RangeState::default()),
        }
    }

    /// Returns the next unique ID, reserving a fresh range when the current
    /// one is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates [`AppError::Internal`] from the range reservation.
    pub async fn next_id(&self) -> Result<i64, AppError> {
        let mut state = self.state.lock().await;

        if state.next >= state.end {
            let start = self.repository.reserve_range(self.range_size).await?;
            state.next = start;
            state.end = start + self.range_size;
            info!("Allocated counter range {} to {}", state.next, state.end);
        }

        let id = state.next;
        state.next += 1;
        Ok(id)
    }
}
