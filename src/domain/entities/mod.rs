//! Core domain entities.
//!
//! - [`LinkEntry`] - A short key paired with the URL it points to

pub mod link;

pub use link::LinkEntry;
