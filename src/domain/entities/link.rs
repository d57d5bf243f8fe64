//! Link entity representing a shortened URL mapping.

/// A short key and the original URL it resolves to.
///
/// The original URL is opaque: it is stored exactly as submitted and never
/// checked for scheme or host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub short_key: String,
    pub original_url: String,
}

impl LinkEntry {
    /// Creates a new LinkEntry instance.
    pub fn new(short_key: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_key: short_key.into(),
            original_url: original_url.into(),
        }
    }
}
