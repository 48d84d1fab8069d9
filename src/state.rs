//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{PgCounterRepository, PgUrlRepository};

/// The shortener service wired to its production repositories.
pub type Shortener = ShortenerService<PgUrlRepository, PgCounterRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<Shortener>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(shortener: Arc<Shortener>, cache: Arc<dyn CacheService>) -> Self {
        Self { shortener, cache }
    }
}
