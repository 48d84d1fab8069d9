//! URL shortening and resolution service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use tracing::{info, warn};

use crate::application::services::CounterRange;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{CounterRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_normalizer::normalize_url;

/// Service for creating and resolving short URLs.
///
/// Normalizes incoming URLs, deduplicates against existing mappings, and
/// derives short codes from sequential counter IDs encoded as base62.
pub struct ShortenerService<U: UrlRepository, C: CounterRepository> {
    url_repository: Arc<U>,
    counter: CounterRange<C>,
}

impl<U: UrlRepository, C: CounterRepository> ShortenerService<U, C> {
    /// Creates a new shortener service.
    pub fn new(url_repository: Arc<U>, counter: CounterRange<C>) -> Self {
        Self {
            url_repository,
            counter,
        }
    }

    /// Creates a short URL for `long_url`, or returns the existing mapping.
    ///
    /// # Deduplication
    ///
    /// If the normalized URL has already been shortened, the existing record
    /// is returned unchanged; `expiration_days` is ignored in that case.
    ///
    /// # Expiration
    ///
    /// `expiration_days` greater than zero sets `expires_at` that many days
    /// from now. Zero, negative, or absent values produce a permanent link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or non-http(s) URLs,
    /// [`AppError::Internal`] on database errors.
    pub async fn shorten(
        &self,
        long_url: String,
        expiration_days: Option<i64>,
    ) -> Result<ShortUrl, AppError> {
        let normalized_url = normalize_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self
            .url_repository
            .find_by_long_url(&normalized_url)
            .await?
        {
            info!("URL already shortened as {}", existing.code);
            return Ok(existing);
        }

        let expires_at = expiration_days
            .filter(|days| *days > 0)
            .map(|days| {
                Duration::try_days(days)
                    .and_then(|delta| Utc::now().checked_add_signed(delta))
                    .ok_or_else(|| {
                        AppError::bad_request(
                            "Expiration is out of range",
                            json!({ "expiration_days": days }),
                        )
                    })
            })
            .transpose()?;

        let counter = self.counter.next_id().await?;
        let code = base62::encode(counter as u64);

        let record = self
            .url_repository
            .create(NewShortUrl {
                code,
                long_url: normalized_url,
                counter,
                expires_at,
            })
            .await?;

        info!("Created short URL {} for {}", record.code, record.long_url);

        Ok(record)
    }

    /// Resolves a short code to its mapping.
    ///
    /// Expired links resolve to `Ok(None)`, same as unknown codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        match self.url_repository.find_by_code(code).await? {
            Some(record) if record.is_expired() => {
                warn!("Short URL expired: {code}");
                Ok(None)
            }
            Some(record) => Ok(Some(record)),
            None => {
                warn!("Short URL not found: {code}");
                Ok(None)
            }
        }
    }

    /// Counts stored mappings. Used by the health check.
    pub async fn link_count(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }
}
