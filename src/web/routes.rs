//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, index_submit_handler, shorten_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET  /`        - Submission form
/// - `POST /`        - Forwarded to `/shorten` with 303 See Other
/// - `POST /shorten` - Create a short link and render the result page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler).post(index_submit_handler))
        .route("/shorten", post(shorten_handler))
}
