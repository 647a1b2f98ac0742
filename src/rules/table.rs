//! Rule table
//!
//! Builds the active rules for a form kind and role from one shared table, so
//! the login and signup pages check the same fields the same way.

use log::debug;
use regex::Regex;

use super::field::Field;
use super::rule::{Check, Rule};
use crate::config::FormConfig;
use crate::error::FormError;
use crate::form::{FormKind, Role};

const USERNAME_PATTERN: &str = "^[A-Za-z]+$";
const YEAR_PATTERN: &str = "^[0-9]+$";

/// Fields each form shows, in page order
pub fn form_fields(kind: FormKind) -> &'static [Field] {
    match kind {
        FormKind::Login => &[Field::Email, Field::Password],
        FormKind::Signup => &Field::ALL,
    }
}

/// Fields whose rules only apply to the student role
pub fn student_only(field: Field) -> bool {
    matches!(field, Field::Year | Field::Branch)
}

fn exact_digits(count: usize, trim: bool) -> Result<Check, FormError> {
    Ok(Check::Pattern {
        regex: Regex::new(&format!("^[0-9]{{{count}}}$"))?,
        trim,
    })
}

fn rule_for(field: Field, config: &FormConfig) -> Result<Rule, FormError> {
    let rule = match field {
        Field::Email => Rule::new(
            field,
            Check::EndsWith(config.email_suffix.clone()),
            format!("Use {} mail only", config.email_suffix),
        ),
        Field::Password => Rule::new(
            field,
            exact_digits(config.password_length, false)?,
            format!(
                "Password must be exactly {} digits (numbers only)",
                config.password_length
            ),
        ),
        Field::ConfirmPassword => Rule::new(
            field,
            Check::SameAs(Field::Password),
            "Passwords do not match",
        ),
        Field::Username => Rule::new(
            field,
            Check::Pattern {
                regex: Regex::new(USERNAME_PATTERN)?,
                trim: true,
            },
            "Username can only contain letters (no special characters and numbers)",
        ),
        Field::Phone => Rule::new(
            field,
            exact_digits(config.phone_length, true)?,
            format!(
                "Phone number must be exactly {} digits",
                config.phone_length
            ),
        ),
        Field::Year => Rule::new(
            field,
            Check::Pattern {
                regex: Regex::new(YEAR_PATTERN)?,
                trim: false,
            },
            "Year must be a number.",
        ),
        Field::Branch => Rule::new(field, Check::NotBlank, "Branch is required."),
    };
    Ok(rule)
}

/// Immutable set of rules active for one form and role
#[derive(Debug, Clone)]
pub struct RuleSet {
    kind: FormKind,
    role: Role,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the active rules. The role only matters on the signup form.
    pub fn build(kind: FormKind, role: Role, config: &FormConfig) -> Result<Self, FormError> {
        let rules = form_fields(kind)
            .iter()
            .copied()
            .filter(|field| !student_only(*field) || role == Role::Student)
            .map(|field| rule_for(field, config))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Built {} rules for {} form ({} role)",
            rules.len(),
            kind,
            role
        );
        Ok(Self { kind, role, rules })
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |rule| rule.field() == field)
    }

    pub fn is_active(&self, field: Field) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Fields whose rules read `field`, so a change to it re-checks them too
    pub fn dependents_of(&self, field: Field) -> Vec<Field> {
        self.rules
            .iter()
            .filter(|rule| rule.depends_on(field))
            .map(Rule::field)
            .collect()
    }

    /// Distinct fields covered by at least one rule, in page order
    pub fn active_fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.rules.iter().map(Rule::field).collect();
        fields.sort();
        fields.dedup();
        fields
    }
}
