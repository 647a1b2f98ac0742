//! Form kind and role selectors

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Which page the form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Login,
    #[default]
    Signup,
}

/// Signup role toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Staff,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Signup => "signup",
        }
    }

    /// Only the signup page carries the student/staff selector
    pub fn has_role_selector(&self) -> bool {
        matches!(self, FormKind::Signup)
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(FormKind::Login),
            "signup" => Ok(FormKind::Signup),
            _ => Err(FormError::InvalidFormKind(s.to_string())),
        }
    }
}

impl FromStr for Role {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "staff" => Ok(Role::Staff),
            _ => Err(FormError::InvalidRole(s.to_string())),
        }
    }
}
