//! Configuration management for the form validators
//!
//! Settings come from an optional `forms.toml` in the working directory with
//! `ZAIKA_FORMS_*` environment overrides. Every key has a default, so a missing
//! file yields the institutional defaults.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::FormError;
use crate::form::{FormKind, Role};

const CONFIG_NAME: &str = "forms";
const ENV_PREFIX: &str = "ZAIKA_FORMS";
const MAX_DIGITS: usize = 32;

/// Form validation settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    /// Page hosted by the console front end
    /// Environment: ZAIKA_FORMS_FORM
    pub form: FormKind,

    /// Role selected when a signup form opens or is reset
    pub default_role: Role,

    /// Literal suffix every email must end with, including the `@`
    pub email_suffix: String,

    /// Exact number of digits in a password
    pub password_length: usize,

    /// Exact number of digits in a phone number
    pub phone_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form: FormKind::Signup,
            default_role: Role::Student,
            email_suffix: "@sakec.ac.in".to_string(),
            password_length: 6,
            phone_length: 10,
        }
    }
}

impl FormConfig {
    /// Load `forms.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, FormError> {
        let settings = Config::builder()
            .add_source(File::with_name(CONFIG_NAME).required(false))
            // Flat keys: ZAIKA_FORMS_PHONE_LENGTH -> phone_length
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
            .build()?;
        Self::finish(settings)
    }

    /// Load settings from TOML text, without environment overrides
    pub fn from_toml(text: &str) -> Result<Self, FormError> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, FormError> {
        let config: FormConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), FormError> {
        match self.email_suffix.strip_prefix('@') {
            Some(domain) if !domain.trim().is_empty() && !domain.contains('@') => {}
            _ => {
                return Err(FormError::InvalidConfig(format!(
                    "email_suffix must be '@' followed by a domain, got {:?}",
                    self.email_suffix
                )));
            }
        }

        for (key, length) in [
            ("password_length", self.password_length),
            ("phone_length", self.phone_length),
        ] {
            if length == 0 || length > MAX_DIGITS {
                return Err(FormError::InvalidConfig(format!(
                    "{key} must be between 1 and {MAX_DIGITS}, got {length}"
                )));
            }
        }

        Ok(())
    }
}
