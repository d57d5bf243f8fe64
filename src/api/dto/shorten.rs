//! DTOs for the link shortening form.

use serde::Deserialize;
use validator::Validate;

/// Form submitted to `POST /shorten`.
///
/// A missing `url` field decodes to an empty string so that it is reported
/// through the same validation error as an empty one.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing url"))]
    pub url: String,
}
