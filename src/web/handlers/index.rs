//! Submission form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect};

/// Template for the submission form.
///
/// Renders `templates/index.html`: a single `url` field posted to `/shorten`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}

/// Sends form posts that hit the root over to the shortening endpoint.
///
/// # Endpoint
///
/// `POST /`
pub async fn index_submit_handler() -> Redirect {
    Redirect::to("/shorten")
}
