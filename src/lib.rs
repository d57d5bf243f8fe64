//! # URL Shortener
//!
//! A small URL shortening service built with Axum that keeps every link in
//! process memory.
//!
//! ## Architecture
//!
//! The crate keeps the layers separate:
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the store trait
//! - **Application Layer** ([`application`]) - Link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory link store
//! - **API Layer** ([`api`]) - Redirect and health handlers, DTOs, middleware
//! - **Web Layer** ([`web`]) - HTML form and result page
//!
//! ## Features
//!
//! - Random 6-character alphanumeric short keys
//! - 301 redirects from `/short/{key}` to the stored URL
//! - Structured logging with text or JSON output
//!
//! Links live as long as the process does; nothing is persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT="4020"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::LinkEntry;
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkStore;
    pub use crate::state::AppState;
}
