//! Caching layer for fast redirect lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Redis-backed cache with TTL support
//! - [`NullCache`] - No-op implementation for testing/disabled caching
//!
//! All cache operations are fail-open: a broken cache must never break a
//! redirect, so implementations log errors and degrade to database lookups.

mod null_cache;
mod redis_cache;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short code to URL mappings.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the long URL for a short code.
    ///
    /// Returns `Ok(None)` on cache miss. Backend errors are logged and
    /// reported as misses.
    async fn get_url(&self, code: &str) -> CacheResult<Option<String>>;

    /// Stores a code to URL mapping with an optional TTL bound in seconds.
    ///
    /// The entry lives for the implementation default TTL, capped at
    /// `ttl_seconds` when given. Callers pass the remaining time to expiry
    /// here so an entry never outlives its link. Backend errors are logged
    /// and swallowed.
    async fn set_url(&self, code: &str, long_url: &str, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    ///
    /// Used by the health check endpoint.
    async fn health_check(&self) -> bool;
}
