//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::LinkEntry;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::key_generator::KeyGenerator;
use serde_json::json;

/// Path prefix under which short keys are served.
pub const SHORT_PATH_PREFIX: &str = "/short/";

/// Service for creating and resolving shortened links.
///
/// Owns the key generator and shares the store with the rest of the
/// application. Keys are minted and written without a uniqueness check, so
/// a colliding key replaces the earlier mapping.
pub struct LinkService<S: LinkStore, G: KeyGenerator> {
    store: Arc<S>,
    generator: G,
}

impl<S: LinkStore, G: KeyGenerator> LinkService<S, G> {
    /// Creates a new link service.
    pub fn new(store: Arc<S>, generator: G) -> Self {
        Self { store, generator }
    }

    /// Mints a key for `original_url`, stores the mapping and returns the key.
    ///
    /// The URL is stored verbatim. There is no retry on collision.
    pub fn create_short_link(&self, original_url: &str) -> String {
        let key = self.generator.generate();
        self.store.put(&key, original_url);
        key
    }

    /// Looks up the URL stored under `key`.
    ///
    /// Absence is an ordinary outcome and yields `None`.
    pub fn get_link(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    /// Resolves a key coming from a request path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `key` is empty.
    /// Returns [`AppError::NotFound`] if no mapping exists for `key`.
    pub fn resolve(&self, key: &str) -> Result<LinkEntry, AppError> {
        if key.is_empty() {
            return Err(AppError::bad_request("Key missing", json!({})));
        }

        self.get_link(key)
            .map(|url| LinkEntry::new(key, url))
            .ok_or_else(|| AppError::not_found("Key not found", json!({ "key": key })))
    }

    /// Constructs the full short URL from the request scheme, host and key.
    pub fn short_url(&self, scheme: &str, host: &str, key: &str) -> String {
        format!(
            "{}://{}{}{}",
            scheme,
            host.trim_end_matches('/'),
            SHORT_PATH_PREFIX,
            key
        )
    }

    /// Number of links currently stored.
    pub fn link_count(&self) -> usize {
        self.store.len()
    }

    /// Returns true until the first link is created.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
