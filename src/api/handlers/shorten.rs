//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenUrlRequest, ShortenUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL, or returns the existing mapping.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path", "expirationDays": 7 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "3D7",
///   "longUrl": "https://example.com/some/long/path",
///   "createdAt": "2025-06-01T12:00:00Z",
///   "expiresAt": "2025-06-08T12:00:00Z"
/// }
/// ```
///
/// `shortUrl` is the bare code; the frontend composes the full link as
/// `origin + /s/ + shortUrl`. `expiresAt` is omitted for permanent links.
///
/// # Errors
///
/// Returns 400 Bad Request for an empty, malformed, or non-http(s) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenUrlRequest>,
) -> Result<Json<ShortenUrlResponse>, AppError> {
    payload.validate()?;

    let record = state
        .shortener
        .shorten(payload.url, payload.expiration_days)
        .await?;

    // Warm the cache for the redirect path. Deduplication can hand back an
    // already-expired record; warm_cache refuses to store those.
    super::warm_cache(state.cache.clone(), &record);

    Ok(Json(record.into()))
}
