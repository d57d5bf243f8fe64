//! HTML template rendering handlers.

mod index;
mod shorten;

pub use index::{index_handler, index_submit_handler};
pub use shorten::{ShortenedTemplate, shorten_handler};
