//! Error handlers
//!
//! Logs host errors and renders them as console replies.

use crate::error::types::FormError;
use log::{error, warn};

/// Log a form host error at a level matching its severity
pub fn handle_error(err: &FormError) {
    match err {
        FormError::Config(_) | FormError::InvalidConfig(_) | FormError::IoError(_) => {
            error!("Form host error: {}", err)
        }
        _ => warn!("Rejected form command: {}", err),
    }
}

/// Convert an error to the reply line sent back to the host
pub fn error_to_reply(err: &FormError) -> String {
    format!("ERR {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormKind;

    #[test]
    fn test_error_reply_text() {
        let err = FormError::NoRoleSelector(FormKind::Login);
        assert_eq!(
            error_to_reply(&err),
            "ERR The login form has no role selector"
        );
        assert_eq!(
            error_to_reply(&FormError::UnknownField("age".into())),
            "ERR Unknown field: age"
        );
    }
}
