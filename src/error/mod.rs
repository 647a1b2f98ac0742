//! Error handling
//!
//! Defines the validation failure type and host error handling.

pub mod handlers;
pub mod types;

pub use types::*;
