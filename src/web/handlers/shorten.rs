//! Handler for the link shortening form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, Uri},
};
use tracing::{debug, info};
use validator::Validate;

use crate::api::dto::shorten::ShortenForm;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::{extract_host, extract_scheme_from_headers};

/// Template for the result page.
///
/// Renders `templates/shortened.html` with the submitted URL and a link to
/// its short form.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "shortened.html")]
pub struct ShortenedTemplate {
    pub original_url: String,
    pub short_url: String,
}

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /shorten` (`application/x-www-form-urlencoded`, field `url`)
///
/// # Response
///
/// HTML page showing the original URL and
/// `{scheme}://{host}/short/{key}`, where host comes from the request's
/// `Host` header (or the URI authority for HTTP/2) and scheme from
/// `X-Forwarded-Proto` (default `https`).
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty, or if the request
/// carries neither a `Host` header nor a URI authority.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Form(form): Form<ShortenForm>,
) -> Result<ShortenedTemplate, AppError> {
    form.validate()?;

    let host = extract_host(&headers, &uri)?;
    let scheme = extract_scheme_from_headers(&headers);
    debug!("Shortening request from host {}", host);

    let key = state.link_service.create_short_link(&form.url);
    let short_url = state.link_service.short_url(&scheme, &host, &key);

    info!("Created short key '{}' for '{}'", key, form.url);

    Ok(ShortenedTemplate {
        original_url: form.url,
        short_url,
    })
}
