//! Validation result types
//!
//! Defines the per-field outcome and the aggregate report returned by the
//! form validator.

use std::collections::BTreeMap;

use crate::error::ValidationFailure;
use crate::rules::Field;

/// Outcome of the active rule(s) for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: Field,
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn pass(field: Field) -> Self {
        Self {
            field,
            valid: true,
            message: None,
        }
    }

    pub fn fail(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn failure(&self) -> Option<ValidationFailure> {
        match (&self.message, self.valid) {
            (Some(message), false) => Some(ValidationFailure::new(self.field, message.clone())),
            _ => None,
        }
    }
}

/// Results for every field covered by the active rules, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    results: BTreeMap<Field, ValidationResult>,
}

impl ValidationReport {
    pub(crate) fn insert(&mut self, result: ValidationResult) {
        self.results.insert(result.field, result);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationResult> {
        self.results.get(&field)
    }

    /// Logical AND of every field result
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|result| result.valid)
    }

    pub fn failures(&self) -> Vec<ValidationFailure> {
        self.results
            .values()
            .filter_map(ValidationResult::failure)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
