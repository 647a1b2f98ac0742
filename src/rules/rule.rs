//! Field rules
//!
//! A rule pairs one field with a predicate over its value and the message shown
//! when the predicate does not hold.

use regex::Regex;

use super::field::{Field, FieldValues};

/// Predicate applied to a field value
#[derive(Debug, Clone)]
pub enum Check {
    /// Trimmed value ends with the literal suffix
    EndsWith(String),
    /// Value matches the pattern, optionally after trimming
    Pattern { regex: Regex, trim: bool },
    /// Trimmed value is not empty
    NotBlank,
    /// Value is exactly equal to another field's current value
    SameAs(Field),
}

impl Check {
    fn holds(&self, value: &str, values: &FieldValues) -> bool {
        match self {
            Check::EndsWith(suffix) => value.trim().ends_with(suffix.as_str()),
            Check::Pattern { regex, trim } => {
                let subject = if *trim { value.trim() } else { value };
                regex.is_match(subject)
            }
            Check::NotBlank => !value.trim().is_empty(),
            Check::SameAs(other) => value == values.get(*other),
        }
    }
}

/// Stateless rule for a single field
#[derive(Debug, Clone)]
pub struct Rule {
    field: Field,
    check: Check,
    message: String,
}

impl Rule {
    pub fn new(field: Field, check: Check, message: impl Into<String>) -> Self {
        Self {
            field,
            check,
            message: message.into(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the predicate reads `other` besides the rule's own field
    pub fn depends_on(&self, other: Field) -> bool {
        matches!(self.check, Check::SameAs(field) if field == other && field != self.field)
    }

    /// Evaluate against the rule's own field in `values`.
    pub fn passes(&self, values: &FieldValues) -> bool {
        self.check.holds(values.get(self.field), values)
    }
}
