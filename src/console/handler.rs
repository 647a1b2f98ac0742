//! Console command handling
//!
//! Applies one parsed command to the form session and renders the reply
//! lines the host would turn into shown/hidden error text.

use log::{debug, info};

use super::parser::{Command, CommandResult};
use crate::error::FormError;
use crate::error::handlers::{error_to_reply, handle_error};
use crate::form::{FieldState, FormSession, Role, SubmitOutcome};
use crate::rules::Field;
use crate::validator::ValidationResult;

/// Handle a command, returning whether to keep reading and the reply lines.
pub fn handle_command(session: &mut FormSession, command: Command) -> (CommandResult, Vec<String>) {
    debug!("Handling {:?}", command);
    match command {
        Command::Quit => (CommandResult::Quit, vec!["BYE".to_string()]),
        Command::Submit => (CommandResult::Continue, submit_reply(session.submit())),
        Command::Fields => (
            CommandResult::Continue,
            session.field_states().iter().map(field_line).collect(),
        ),
        Command::Reset => (CommandResult::Continue, reply_or_error(reset(session))),
        Command::Set(field, value) => (
            CommandResult::Continue,
            reply_or_error(handle_set(session, &field, value)),
        ),
        Command::Role(role) => (
            CommandResult::Continue,
            reply_or_error(handle_role(session, &role)),
        ),
        Command::Unknown(line) => {
            info!("Unknown console command: {}", line);
            (
                CommandResult::Continue,
                vec![format!("ERR unknown command: {}", line)],
            )
        }
    }
}

fn reply_or_error(result: Result<Vec<String>, FormError>) -> Vec<String> {
    result.unwrap_or_else(|err| {
        handle_error(&err);
        vec![error_to_reply(&err)]
    })
}

fn handle_set(
    session: &mut FormSession,
    field: &str,
    value: String,
) -> Result<Vec<String>, FormError> {
    let field: Field = field.parse()?;
    let results = session.input(field, value)?;
    if results.first().is_none_or(|result| result.field != field) {
        let mut lines = vec![format!("NOTE {}: no active rule", field)];
        lines.extend(results.iter().map(result_line));
        return Ok(lines);
    }
    Ok(results.iter().map(result_line).collect())
}

fn handle_role(session: &mut FormSession, role: &str) -> Result<Vec<String>, FormError> {
    let role: Role = role.parse()?;
    let toggled = session.set_role(role)?;

    let mut lines = vec![format!("ROLE {}", session.role())];
    lines.extend(toggled.iter().map(|state| {
        let status = if state.required() { "REQUIRED" } else { "OPTIONAL" };
        format!("{} {}", status, state.field)
    }));
    Ok(lines)
}

fn reset(session: &mut FormSession) -> Result<Vec<String>, FormError> {
    session.reset()?;
    Ok(vec!["RESET".to_string()])
}

fn result_line(result: &ValidationResult) -> String {
    match &result.message {
        Some(message) if !result.valid => format!("ERR {}: {}", result.field, message),
        _ => format!("OK {}", result.field),
    }
}

fn field_line(state: &FieldState) -> String {
    format!(
        "FIELD {} {} {}",
        state.field,
        if state.required() { "required" } else { "optional" },
        if state.active { "active" } else { "inactive" }
    )
}

fn submit_reply(outcome: SubmitOutcome) -> Vec<String> {
    match outcome {
        SubmitOutcome::Accepted => vec!["SUBMITTED".to_string()],
        SubmitOutcome::Blocked(failures) => {
            let mut lines = vec![format!("BLOCKED {}", failures.len())];
            lines.extend(failures.iter().map(|failure| format!("ERR {}", failure)));
            lines
        }
    }
}
