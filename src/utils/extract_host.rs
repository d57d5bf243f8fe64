//! Host and scheme extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

/// Header set by TLS-terminating proxies with the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Scheme used when no proxy reports one.
const DEFAULT_SCHEME: &str = "https";

/// Extracts the authority (host and optional port) the client addressed.
///
/// The `Host` header is used when present. HTTP/2 requests carry the
/// authority in the request URI instead (`:authority`), so the URI is the
/// fallback. The port is kept so that composed links point back at the
/// exact address the client used (e.g. `localhost:4020`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither a non-blank `Host` header nor a URI authority is present
/// - The `Host` header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// let host = extract_host(&headers, &Uri::from_static("/shorten")).unwrap();
/// assert_eq!(host, "example.com:8080");
/// ```
pub fn extract_host(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    if let Some(value) = headers.get(header::HOST) {
        let host = value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim();

        if !host.is_empty() {
            return Ok(host.to_string());
        }
    }

    uri.authority()
        .map(|authority| match authority.port() {
            Some(port) => format!("{}:{}", authority.host(), port),
            None => authority.host().to_string(),
        })
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))
}

/// Returns the scheme the client used, as reported by `X-Forwarded-Proto`.
///
/// Only the first value of a comma-separated list is used. Falls back to
/// `https` when the header is absent or unreadable.
pub fn extract_scheme_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| v.eq_ignore_ascii_case("http") || v.eq_ignore_ascii_case("https"))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_SCHEME.to_string())
}
