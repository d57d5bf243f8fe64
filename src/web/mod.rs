//! Web layer serving the HTML submission form and result page.
//!
//! Uses Askama templates for server-side rendering. Submitted values are
//! HTML-escaped by the templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
