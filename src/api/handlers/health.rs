//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "Links stored: 42"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: check_store(&state),
        },
    })
}

/// Reports the number of links held by the in-memory store.
fn check_store(state: &AppState) -> CheckStatus {
    let service = &state.link_service;
    let message = if service.is_empty() {
        "No links stored".to_string()
    } else {
        format!("Links stored: {}", service.link_count())
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message),
    }
}
