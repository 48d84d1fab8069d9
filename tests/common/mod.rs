#![allow(dead_code)]

use shortly::application::services::{CounterRange, ShortenerService};
use shortly::infrastructure::cache::{CacheError, CacheResult, CacheService, NullCache};
use shortly::infrastructure::persistence::{PgCounterRepository, PgUrlRepository};
use shortly::state::AppState;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub async fn create_test_url(pool: &PgPool, code: &str, url: &str, counter: i64) {
    sqlx::query("INSERT INTO urls (code, long_url, counter) VALUES ($1, $2, $3)")
        .bind(code)
        .bind(url)
        .bind(counter)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_expired_url(pool: &PgPool, code: &str, url: &str, counter: i64) {
    sqlx::query(
        "INSERT INTO urls (code, long_url, counter, expires_at) \
         VALUES ($1, $2, $3, NOW() - INTERVAL '1 hour')",
    )
    .bind(code)
    .bind(url)
    .bind(counter)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn url_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_cache(pool, Arc::new(NullCache))
}

pub fn create_test_state_with_cache(pool: PgPool, cache: Arc<dyn CacheService>) -> AppState {
    let pool = Arc::new(pool);

    let url_repo = Arc::new(PgUrlRepository::new(pool.clone()));
    let counter_repo = Arc::new(PgCounterRepository::new(pool));
    let counter = CounterRange::new(counter_repo, 100);
    let shortener = Arc::new(ShortenerService::new(url_repo, counter));

    AppState::new(shortener, cache)
}

/// In-memory [`CacheService`] that records writes and can simulate a broken
/// backend for exercising the cache-first redirect flow.
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Option<u64>)>>,
    broken: AtomicBool,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            broken: AtomicBool::new(false),
        }
    }

    /// A cache whose reads always fail, for the fail-open path.
    pub fn broken() -> Self {
        let cache = Self::new();
        cache.broken.store(true, Ordering::SeqCst);
        cache
    }

    pub fn insert(&self, code: &str, long_url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), (long_url.to_string(), None));
    }

    pub fn entry(&self, code: &str) -> Option<(String, Option<u64>)> {
        self.entries.lock().unwrap().get(code).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[async_trait::async_trait]
impl CacheService for InMemoryCache {
    async fn get_url(&self, code: &str) -> CacheResult<Option<String>> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(CacheError::Connection("connection refused".to_string()));
        }
        Ok(self.entry(code).map(|(url, _)| url))
    }

    async fn set_url(
        &self,
        code: &str,
        long_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(code.to_string(), (long_url.to_string(), ttl_seconds));
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.broken.load(Ordering::SeqCst)
    }
}
