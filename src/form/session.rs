//! Form session
//!
//! Host-side state of one open form: the current input values, the selected
//! role, and the rule set that role activates. Drives single-field checks on
//! input and the full check on submit.

use log::info;

use super::kind::{FormKind, Role};
use crate::config::FormConfig;
use crate::error::{FormError, ValidationFailure};
use crate::rules::{Field, FieldValues, RuleSet, form_fields, student_only};
use crate::validator::{FormValidator, ValidationReport, ValidationResult};

/// Status of one input on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub field: Field,
    pub active: bool,
}

impl FieldState {
    /// An input is required exactly when a rule checks it; inactive inputs are optional.
    pub fn required(&self) -> bool {
        self.active
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Default action withheld; one entry per failing field
    Blocked(Vec<ValidationFailure>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

pub struct FormSession {
    config: FormConfig,
    values: FieldValues,
    rules: RuleSet,
    validator: FormValidator,
}

impl FormSession {
    /// Open the form named in `config` with the configured default role.
    pub fn new(config: FormConfig) -> Result<Self, FormError> {
        let kind = config.form;
        Self::open(kind, config)
    }

    /// Open a specific form kind, ignoring `config.form`.
    pub fn open(kind: FormKind, config: FormConfig) -> Result<Self, FormError> {
        let rules = RuleSet::build(kind, config.default_role, &config)?;
        Ok(Self {
            config,
            values: FieldValues::new(),
            rules,
            validator: FormValidator,
        })
    }

    pub fn kind(&self) -> FormKind {
        self.rules.kind()
    }

    pub fn role(&self) -> Role {
        self.rules.role()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    fn ensure_on_form(&self, field: Field) -> Result<(), FormError> {
        if form_fields(self.kind()).contains(&field) {
            Ok(())
        } else {
            Err(FormError::FieldNotOnForm {
                field,
                form: self.kind(),
            })
        }
    }

    /// Store a new value and re-run the rules it affects.
    ///
    /// The field's own result comes first (absent when no active rule covers
    /// it), followed by any already-filled field whose rule reads this one,
    /// such as confirm-password after a password edit.
    pub fn input(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<Vec<ValidationResult>, FormError> {
        self.ensure_on_form(field)?;
        self.values.set(field, value);

        let affected = std::iter::once(field).chain(
            self.rules
                .dependents_of(field)
                .into_iter()
                .filter(|dependent| self.values.contains(*dependent)),
        );
        Ok(affected
            .filter_map(|f| self.validator.validate_field(f, &self.values, &self.rules))
            .collect())
    }

    /// Switch the signup role and return the new status of the toggled fields.
    ///
    /// Values of fields the role deactivates are kept but no longer checked.
    pub fn set_role(&mut self, role: Role) -> Result<Vec<FieldState>, FormError> {
        if !self.kind().has_role_selector() {
            return Err(FormError::NoRoleSelector(self.kind()));
        }
        if role != self.role() {
            self.rules = RuleSet::build(self.kind(), role, &self.config)?;
            info!("Signup role switched to {}", role);
        }
        Ok(self
            .field_states()
            .into_iter()
            .filter(|state| student_only(state.field))
            .collect())
    }

    /// Every input on the page with its active flag
    pub fn field_states(&self) -> Vec<FieldState> {
        form_fields(self.kind())
            .iter()
            .map(|&field| FieldState {
                field,
                active: self.rules.is_active(field),
            })
            .collect()
    }

    /// Full check of the current values against the active rules
    pub fn report(&self) -> ValidationReport {
        self.validator.validate(&self.values, &self.rules)
    }

    /// Run every active rule; submission proceeds only if all pass.
    pub fn submit(&self) -> SubmitOutcome {
        let report = self.report();
        if report.is_valid() {
            info!("{} form submitted", self.kind());
            SubmitOutcome::Accepted
        } else {
            let failures = report.failures();
            info!(
                "{} form submission blocked by {} field(s)",
                self.kind(),
                failures.len()
            );
            SubmitOutcome::Blocked(failures)
        }
    }

    /// Clear all values and restore the default role.
    pub fn reset(&mut self) -> Result<(), FormError> {
        self.values.clear();
        if self.role() != self.config.default_role {
            self.rules = RuleSet::build(self.kind(), self.config.default_role, &self.config)?;
        }
        Ok(())
    }
}
