//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Path of the static page users land on for dead links.
const ERROR_PAGE: &str = "/error.html";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Request Flow
///
/// 1. Check cache for the code
/// 2. On cache miss or cache error, query the database
/// 3. Asynchronously re-populate the cache
/// 4. Return 307 Temporary Redirect to the long URL
///
/// Unknown and expired codes redirect to the static error page instead of
/// returning a bare 404; that is the contract the frontend relies on.
///
/// # Errors
///
/// Returns 500 only on database failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.cache.get_url(&code).await {
        Ok(Some(cached_url)) => {
            debug!("Cache HIT for {code}");
            return Ok(Redirect::temporary(&cached_url));
        }
        Ok(None) => {
            debug!("Cache MISS for {code}");
        }
        Err(e) => {
            error!("Cache error: {e}");
        }
    }

    let Some(record) = state.shortener.resolve(&code).await? else {
        return Ok(Redirect::temporary(ERROR_PAGE));
    };

    // Re-populate the cache for the next lookup
    super::warm_cache(state.cache.clone(), &record);

    Ok(Redirect::temporary(&record.long_url))
}
