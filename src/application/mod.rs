//! Application layer services implementing business logic.
//!
//! Services coordinate the key generator and the link store and give HTTP
//! handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
