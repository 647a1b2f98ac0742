// Console command enum standing in for page events
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Submit,
    Fields,
    Reset,
    Set(String, String),
    Role(String),
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Quit,
    Continue,
}

// Parse a raw input line into a Command
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_end_matches(['\r', '\n']).trim_start();
    let trimmed = line.trim_end();
    let mut parts = line.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim_start();

    match cmd.as_str() {
        "QUIT" | "Q" => Command::Quit,
        "SUBMIT" => Command::Submit,
        "FIELDS" => Command::Fields,
        "RESET" => Command::Reset,
        "ROLE" if !arg.is_empty() => Command::Role(arg.trim().to_string()),
        "SET" if !arg.is_empty() => {
            // Value is everything after the field name, inner spacing kept
            let mut rest = arg.splitn(2, char::is_whitespace);
            let field = rest.next().unwrap_or("").to_string();
            let value = rest.next().unwrap_or("").to_string();
            Command::Set(field, value)
        }
        _ => Command::Unknown(trimmed.to_string()),
    }
}
