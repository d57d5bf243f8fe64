//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /short/{key}`
///
/// # Response
///
/// `301 Moved Permanently` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 404 Not Found if the key was never stored.
/// Returns 500 if the stored URL cannot be sent as a header value.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Redirect requested for key: {}", key);

    let link = state.link_service.resolve(&key).inspect_err(|e| {
        if matches!(e, AppError::NotFound { .. }) {
            warn!("Unknown short key '{}'", key);
        }
    })?;

    let location = HeaderValue::try_from(link.original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "key": link.short_key }),
        )
    })?;

    info!("Redirecting '{}' to '{}'", link.short_key, link.original_url);

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}

/// Rejects redirect requests that carry no key.
///
/// # Endpoint
///
/// `GET /short`
pub async fn missing_key_handler() -> AppError {
    debug!("Redirect requested without a key");
    AppError::bad_request("Key missing", json!({}))
}
