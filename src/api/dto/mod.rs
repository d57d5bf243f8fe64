//! Data Transfer Objects for requests and responses.
//!
//! Request DTOs use Serde for decoding and validator for input validation.

pub mod health;
pub mod shorten;
