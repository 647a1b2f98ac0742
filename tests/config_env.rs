// Environment overrides are process-wide, so this file holds a single test
// and runs as its own test binary.

use zaika_forms::{FormConfig, FormKind, Role};

#[test]
fn test_load_applies_environment_overrides() {
    // SAFETY: no other test in this binary reads or writes the environment
    unsafe {
        std::env::set_var("ZAIKA_FORMS_PHONE_LENGTH", "12");
        std::env::set_var("ZAIKA_FORMS_FORM", "login");
        std::env::set_var("ZAIKA_FORMS_EMAIL_SUFFIX", "@example.edu");
    }

    let config = FormConfig::load().unwrap();
    assert_eq!(config.phone_length, 12);
    assert_eq!(config.form, FormKind::Login);
    assert_eq!(config.email_suffix, "@example.edu");
    // Untouched keys still come from forms.toml or the defaults
    assert_eq!(config.password_length, 6);
    assert_eq!(config.default_role, Role::Student);

    unsafe {
        std::env::set_var("ZAIKA_FORMS_PASSWORD_LENGTH", "0");
    }
    assert!(FormConfig::load().is_err());

    unsafe {
        std::env::remove_var("ZAIKA_FORMS_PHONE_LENGTH");
        std::env::remove_var("ZAIKA_FORMS_FORM");
        std::env::remove_var("ZAIKA_FORMS_EMAIL_SUFFIX");
        std::env::remove_var("ZAIKA_FORMS_PASSWORD_LENGTH");
    }
}
