//! API route configuration.

use crate::api::handlers::{health_handler, missing_key_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public redirect and status routes.
///
/// # Endpoints
///
/// - `GET /short/{key}` - Redirect to the stored URL
/// - `GET /short`       - Rejected: key missing
/// - `GET /health`      - Service health
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/short/{key}", get(redirect_handler))
        .route("/short", get(missing_key_handler))
        .route("/short/", get(missing_key_handler))
        .route("/health", get(health_handler))
}
