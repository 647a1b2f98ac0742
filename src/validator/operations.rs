//! Form validator
//!
//! Evaluates an active rule set against a snapshot of field values. Pure: the
//! same values and rules always give the same report, and nothing is kept
//! between calls.

use log::debug;

use super::results::{ValidationReport, ValidationResult};
use crate::rules::{Field, FieldValues, Rule, RuleSet};

/// Stateless validator shared by the login and signup forms
#[derive(Debug, Default, Clone, Copy)]
pub struct FormValidator;

impl FormValidator {
    /// Run every active rule and collect one result per field.
    pub fn validate(&self, values: &FieldValues, rules: &RuleSet) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in rules.active_fields() {
            if let Some(result) = self.validate_field(field, values, rules) {
                report.insert(result);
            }
        }
        debug!(
            "Validated {} fields on {} form: {}",
            report.len(),
            rules.kind(),
            if report.is_valid() { "valid" } else { "invalid" }
        );
        report
    }

    /// Re-run only the rules for `field`. `None` when no active rule covers it.
    ///
    /// With several rules on one field the first failing rule's message wins.
    pub fn validate_field(
        &self,
        field: Field,
        values: &FieldValues,
        rules: &RuleSet,
    ) -> Option<ValidationResult> {
        let mut covered = false;
        for rule in rules.for_field(field) {
            covered = true;
            if !evaluate(rule, values) {
                return Some(ValidationResult::fail(field, rule.message()));
            }
        }
        covered.then(|| ValidationResult::pass(field))
    }
}

fn evaluate(rule: &Rule, values: &FieldValues) -> bool {
    let passed = rule.passes(values);
    debug!("Rule {} -> {}", rule.field(), passed);
    passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::form::{FormKind, Role};

    fn signup(role: Role) -> RuleSet {
        RuleSet::build(FormKind::Signup, role, &FormConfig::default()).unwrap()
    }

    fn check(field: Field, value: &str) -> ValidationResult {
        FormValidator
            .validate_field(field, &FieldValues::new().with(field, value), &signup(Role::Student))
            .unwrap()
    }

    #[test]
    fn test_email_scenarios() {
        assert_eq!(
            check(Field::Email, "a@gmail.com"),
            ValidationResult::fail(Field::Email, "Use @sakec.ac.in mail only")
        );
        assert!(check(Field::Email, "a@sakec.ac.in").valid);
        assert!(check(Field::Email, "  a@sakec.ac.in  ").valid);
        assert!(!check(Field::Email, "a@sakec.ac.in.evil.com").valid);
    }

    #[test]
    fn test_password_scenarios() {
        let short = check(Field::Password, "12345");
        assert!(!short.valid);
        assert_eq!(
            short.message.as_deref(),
            Some("Password must be exactly 6 digits (numbers only)")
        );
        assert!(check(Field::Password, "123456").valid);
        assert!(!check(Field::Password, "1234567").valid);
        assert!(!check(Field::Password, "12345a").valid);
        assert!(!check(Field::Password, " 123456").valid);
        assert!(!check(Field::Password, "١٢٣٤٥٦").valid);
    }

    #[test]
    fn test_username_scenarios() {
        let failed = check(Field::Username, "abc123");
        assert_eq!(
            failed.message.as_deref(),
            Some("Username can only contain letters (no special characters and numbers)")
        );
        assert!(check(Field::Username, "abc").valid);
        assert!(check(Field::Username, " Abc ").valid);
        assert!(!check(Field::Username, "ab c").valid);
        assert!(!check(Field::Username, "").valid);
        assert!(!check(Field::Username, "José").valid);
    }

    #[test]
    fn test_phone_scenarios() {
        let failed = check(Field::Phone, "12345");
        assert_eq!(
            failed.message.as_deref(),
            Some("Phone number must be exactly 10 digits")
        );
        assert!(check(Field::Phone, "9876543210").valid);
        assert!(check(Field::Phone, " 9876543210 ").valid);
        assert!(!check(Field::Phone, "98765 43210").valid);
    }

    #[test]
    fn test_year_and_branch_scenarios() {
        let year = check(Field::Year, "abc");
        assert_eq!(year.message.as_deref(), Some("Year must be a number."));
        assert!(check(Field::Year, "3").valid);
        assert!(!check(Field::Year, " 3").valid);

        let branch = check(Field::Branch, "  ");
        assert_eq!(branch.message.as_deref(), Some("Branch is required."));
        assert!(check(Field::Branch, "Computer").valid);
    }

    #[test]
    fn test_confirm_password_tracks_password() {
        let rules = signup(Role::Staff);
        let values = FieldValues::new()
            .with(Field::Password, "123456")
            .with(Field::ConfirmPassword, "654321");
        let result = FormValidator
            .validate_field(Field::ConfirmPassword, &values, &rules)
            .unwrap();
        assert_eq!(result.message.as_deref(), Some("Passwords do not match"));

        let values = values.with(Field::ConfirmPassword, "123456");
        assert!(
            FormValidator
                .validate_field(Field::ConfirmPassword, &values, &rules)
                .unwrap()
                .valid
        );
    }

    #[test]
    fn test_inactive_field_has_no_result() {
        let values = FieldValues::new().with(Field::Year, "abc");
        assert!(
            FormValidator
                .validate_field(Field::Year, &values, &signup(Role::Staff))
                .is_none()
        );
    }

    #[test]
    fn test_report_aggregates_all_fields() {
        let values = FieldValues::new()
            .with(Field::Email, "a@sakec.ac.in")
            .with(Field::Username, "asha")
            .with(Field::Phone, "9876543210")
            .with(Field::Password, "123456")
            .with(Field::ConfirmPassword, "123456");

        let staff = FormValidator.validate(&values, &signup(Role::Staff));
        assert!(staff.is_valid());
        assert_eq!(staff.len(), 5);

        let student = FormValidator.validate(&values, &signup(Role::Student));
        assert!(!student.is_valid());
        let failed: Vec<Field> = student.failures().iter().map(|f| f.field).collect();
        assert_eq!(failed, vec![Field::Year, Field::Branch]);
    }
}
