//! Top-level router composition.
//!
//! # Route Structure
//!
//! - `GET  /s/{code}`    - Short link redirect (public)
//! - `POST /api/shorten` - Create a short URL (rate-limited)
//! - `GET  /api/health`  - Health check: database, cache
//! - `/*`                - Static frontend (form page, error page, assets)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/s/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
