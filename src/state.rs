//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkStore;
use crate::utils::key_generator::RandomKeyGenerator;

/// Link service wired to the in-memory store and random key generator.
pub type AppLinkService = LinkService<InMemoryLinkStore, RandomKeyGenerator>;

/// State shared by all request handlers.
///
/// Cloning is cheap: the service sits behind an [`Arc`], so every clone
/// refers to the same store for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    /// Builds the state around an existing store.
    pub fn new(store: Arc<InMemoryLinkStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store, RandomKeyGenerator)),
        }
    }
}
