//! HTTP request handlers.

use std::sync::Arc;

use chrono::Utc;
use tracing::error;

use crate::domain::entities::ShortUrl;
use crate::infrastructure::cache::CacheService;

mod health;
mod redirect;
mod shorten;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;

/// Writes a resolved mapping to the cache (fire-and-forget).
///
/// Expired records are never written, and for expiring links the TTL is
/// bounded by the remaining time to expiry, so a cached entry cannot outlive
/// its link and keep serving a dead redirect.
fn warm_cache(cache: Arc<dyn CacheService>, record: &ShortUrl) {
    if record.is_expired() {
        return;
    }

    let ttl = record
        .expires_at
        .map(|expires_at| (expires_at - Utc::now()).num_seconds().max(1) as u64);

    let code = record.code.clone();
    let long_url = record.long_url.clone();
    tokio::spawn(async move {
        if let Err(e) = cache.set_url(&code, &long_url, ttl).await {
            error!("Failed to cache URL: {e}");
        }
    });
}
