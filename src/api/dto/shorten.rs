//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortUrl;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    pub url: String,

    /// Optional validity window in days. Values below 1 mean no expiration.
    pub expiration_days: Option<i64>,
}

/// Response describing a created (or already existing) short URL.
///
/// `short_url` carries the bare code; clients compose the full link as
/// `origin + "/s/" + shortUrl`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlResponse {
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<ShortUrl> for ShortenUrlResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            short_url: record.code,
            long_url: record.long_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
        }
    }
}
