//! Link store implementations.

mod in_memory_link_store;

pub use in_memory_link_store::InMemoryLinkStore;
