//! No-op cache implementation for testing or disabled caching.

use async_trait::async_trait;
use tracing::debug;

use super::{CacheResult, CacheService};

/// A cache that stores nothing. Every lookup is a miss.
///
/// Used when `REDIS_URL` is unset, when the Redis connection fails at
/// startup, and in tests where caching should be bypassed.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _code: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_url(
        &self,
        _code: &str,
        _long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
