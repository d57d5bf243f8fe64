//! Process-local link store guarded by a single mutex.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::repositories::LinkStore;

/// In-memory [`LinkStore`] living for the lifetime of the process.
///
/// Every operation takes the same lock for the duration of one map call
/// and releases it when the guard drops. Entries are never removed.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    links: Mutex<HashMap<String, String>>,
}

impl InMemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // The map only holds owned strings, so a panic elsewhere cannot leave it
    // half-updated.
    fn links(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.links.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LinkStore for InMemoryLinkStore {
    fn put(&self, key: &str, url: &str) {
        self.links().insert(key.to_owned(), url.to_owned());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.links().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.links().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryLinkStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_put_then_get() {
        let store = InMemoryLinkStore::new();
        store.put("aZ9bQ1", "https://example.com/a/b");

        assert_eq!(
            store.get("aZ9bQ1").as_deref(),
            Some("https://example.com/a/b")
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_key() {
        let store = InMemoryLinkStore::new();
        store.put("aZ9bQ1", "https://example.com");

        assert!(store.get("doesNotExist").is_none());
        assert!(store.get("").is_none());
    }

    #[test]
    fn test_put_overwrites_existing_key() {
        let store = InMemoryLinkStore::new();
        store.put("abc123", "https://first.com");
        store.put("abc123", "https://second.com");

        assert_eq!(store.get("abc123").as_deref(), Some("https://second.com"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let store = InMemoryLinkStore::new();
        store.put("abcDEF", "https://upper.com");
        store.put("abcdef", "https://lower.com");

        assert_eq!(store.get("abcDEF").as_deref(), Some("https://upper.com"));
        assert_eq!(store.get("abcdef").as_deref(), Some("https://lower.com"));
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let store = Arc::new(InMemoryLinkStore::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..250 {
                        let key = format!("w{worker}k{i}");
                        let url = format!("https://example.com/{worker}/{i}");
                        store.put(&key, &url);
                        assert_eq!(store.get(&key), Some(url));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 8 * 250);
        assert_eq!(
            store.get("w3k117").as_deref(),
            Some("https://example.com/3/117")
        );
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let store = Arc::new(InMemoryLinkStore::new());
        store.put("before", "https://before.com");

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.links.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        store.put("after", "https://after.com");
        assert_eq!(store.get("before").as_deref(), Some("https://before.com"));
        assert_eq!(store.get("after").as_deref(), Some("https://after.com"));
    }
}
