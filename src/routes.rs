//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Submission form
//! - `POST /`             - 303 to `/shorten`
//! - `POST /shorten`      - Create a short link
//! - `GET  /short/{key}`  - 301 redirect to the stored URL
//! - `GET  /health`       - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the routes and per-request middleware.
///
/// Exposed separately from [`app_router`] so tests can drive the router
/// directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/short/abc123/`
/// resolves like `/short/abc123`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
