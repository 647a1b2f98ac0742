pub mod config;
pub mod console;
pub mod error;
pub mod form;
pub mod rules;
pub mod validator;

pub use config::FormConfig;
pub use error::{FormError, ValidationFailure};
pub use form::{FormKind, FormSession, Role, SubmitOutcome};
pub use rules::{Field, FieldValues, RuleSet};
pub use validator::{FormValidator, ValidationReport, ValidationResult};
