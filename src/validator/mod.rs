//! Form validation
//!
//! Runs active rules against field values and reports per-field outcomes.

pub mod operations;
pub mod results;

pub use operations::FormValidator;
pub use results::{ValidationReport, ValidationResult};
