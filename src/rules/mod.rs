//! Validation rules
//!
//! Field names, rule predicates, and the shared rule table both forms use.

pub mod field;
pub mod rule;
pub mod table;

pub use field::{Field, FieldValues};
pub use rule::{Check, Rule};
pub use table::{RuleSet, form_fields, student_only};
