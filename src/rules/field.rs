//! Form fields
//!
//! The closed set of input names both forms draw from, and the snapshot of
//! their current values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// A named input on the login or signup page.
///
/// Ordering follows the signup page layout so reports list fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Username,
    Phone,
    Password,
    ConfirmPassword,
    Year,
    Branch,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Email,
        Field::Username,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
        Field::Year,
        Field::Branch,
    ];

    /// Input name as it appears on the page
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Username => "username",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
            Field::Year => "year",
            Field::Branch => "branch",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Current values of a form's inputs, read at validation time.
///
/// An input that was never filled reads as the empty string, like an empty
/// text box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<Field, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Whether the field was ever filled in, even with an empty string
    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (field, value) in iter {
            values.set(field, value);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!(
            "confirm-password".parse::<Field>().unwrap(),
            Field::ConfirmPassword
        );
        assert_eq!(" Phone ".parse::<Field>().unwrap(), Field::Phone);
        assert!(matches!(
            "age".parse::<Field>(),
            Err(FormError::UnknownField(name)) if name == "age"
        ));
    }

    #[test]
    fn test_missing_value_reads_empty() {
        let values = FieldValues::new().with(Field::Email, "a@sakec.ac.in");
        assert_eq!(values.get(Field::Email), "a@sakec.ac.in");
        assert_eq!(values.get(Field::Password), "");
    }
}
