//! Storage trait for short key to URL mappings.

/// Storage interface mapping short keys to original URLs.
///
/// Implementations are shared across request tasks and must serialize
/// access internally. All operations complete synchronously; none of them
/// can fail.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkStore`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Inserts the mapping for `key`, replacing any previous URL.
    ///
    /// No uniqueness check is performed: the last writer for a key wins.
    fn put(&self, key: &str, url: &str);

    /// Looks up the URL stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Some(url)` if the key is present
    /// - `None` if it was never inserted
    fn get(&self, key: &str) -> Option<String>;

    /// Number of stored mappings.
    fn len(&self) -> usize;

    /// Returns true if nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
