//! Error types
//!
//! Defines the validation failure carried back to the form host and the
//! host-level errors raised while driving a form.

use std::fmt;
use std::io;

use crate::form::FormKind;
use crate::rules::Field;

/// A single failed rule: the field it belongs to and its fixed message.
///
/// Failures are data, not control flow. They are returned inside reports and
/// submit outcomes and never bubble up through `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: Field,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationFailure {}

/// Errors raised by the form host (session, console, configuration)
#[derive(Debug)]
pub enum FormError {
    UnknownField(String),
    FieldNotOnForm { field: Field, form: FormKind },
    NoRoleSelector(FormKind),
    InvalidRole(String),
    InvalidFormKind(String),
    InvalidConfig(String),
    Config(config::ConfigError),
    Pattern(regex::Error),
    IoError(io::Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(name) => write!(f, "Unknown field: {}", name),
            FormError::FieldNotOnForm { field, form } => {
                write!(f, "Field {} is not part of the {} form", field, form)
            }
            FormError::NoRoleSelector(form) => {
                write!(f, "The {} form has no role selector", form)
            }
            FormError::InvalidRole(role) => {
                write!(f, "Invalid role: {} (expected student or staff)", role)
            }
            FormError::InvalidFormKind(kind) => {
                write!(f, "Invalid form: {} (expected login or signup)", kind)
            }
            FormError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            FormError::Config(e) => write!(f, "Configuration error: {}", e),
            FormError::Pattern(e) => write!(f, "Pattern error: {}", e),
            FormError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Config(e) => Some(e),
            FormError::Pattern(e) => Some(e),
            FormError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for FormError {
    fn from(error: config::ConfigError) -> Self {
        FormError::Config(error)
    }
}

impl From<regex::Error> for FormError {
    fn from(error: regex::Error) -> Self {
        FormError::Pattern(error)
    }
}

impl From<io::Error> for FormError {
    fn from(error: io::Error) -> Self {
        FormError::IoError(error)
    }
}
