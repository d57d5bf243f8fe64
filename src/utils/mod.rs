//! Utility functions for key generation and request handling.
//!
//! - [`key_generator`] - Random short key generation
//! - [`extract_host`] - Host and scheme extraction from HTTP headers

pub mod extract_host;
pub mod key_generator;
