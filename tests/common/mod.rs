#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;
use url_shortener::infrastructure::persistence::InMemoryLinkStore;
use url_shortener::routes;
use url_shortener::state::AppState;

pub const TEST_HOST: &str = "sho.rt";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkStore::new()))
}

pub fn create_test_app(state: AppState) -> Router {
    routes::router(state)
}

/// Pulls the six-character key out of a rendered result page.
pub fn extract_short_key(body: &str) -> String {
    let start = body
        .find("/short/")
        .map(|idx| idx + "/short/".len())
        .expect("short url in page");
    body[start..start + 6].to_string()
}

/// Six ASCII alphanumerics, the shape every generated key has.
pub fn is_generated_key(key: &str) -> bool {
    key.len() == 6 && key.chars().all(|c| c.is_ascii_alphanumeric())
}
