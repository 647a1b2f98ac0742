//! Console front end
//!
//! A line-oriented host for one form. Each line is one page event (an input
//! change, a role click, a submit) handled to completion before the next line
//! is read.

pub mod handler;
pub mod parser;

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::FormError;
use crate::form::FormSession;
use handler::handle_command;
use parser::{CommandResult, parse_command};

/// Drive `session` from `reader` until QUIT or end of input.
pub async fn run<R, W>(session: &mut FormSession, mut reader: R, mut writer: W) -> Result<(), FormError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(
        "Hosting {} form ({} role)",
        session.kind(),
        session.role()
    );
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer).await? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and fail the rules like any other bad input
        let line = String::from_utf8_lossy(&buffer);
        let (result, replies) = handle_command(session, parse_command(&line));
        for reply in replies {
            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.flush().await?;

        if result == CommandResult::Quit {
            break;
        }
    }

    info!("Console input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::form::FormKind;

    #[tokio::test]
    async fn test_stops_at_quit() {
        let mut session = FormSession::open(FormKind::Login, FormConfig::default()).unwrap();
        let input: &[u8] = b"SET email a@sakec.ac.in\nQUIT\nSET email nope\n";
        let mut output = Vec::new();

        run(&mut session, input, &mut output).await.unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "OK email\nBYE\n");
        assert_eq!(session.values().get(crate::rules::Field::Email), "a@sakec.ac.in");
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_keeps_session_alive() {
        let mut session = FormSession::open(FormKind::Login, FormConfig::default()).unwrap();
        let input: &[u8] = b"SET email \xff\nSET email a@sakec.ac.in\r\nQUIT\n";
        let mut output = Vec::new();

        run(&mut session, input, &mut output).await.unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ERR email: Use @sakec.ac.in mail only\nOK email\nBYE\n"
        );
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut session = FormSession::open(FormKind::Login, FormConfig::default()).unwrap();
        let input: &[u8] = b"SET password 123456";
        let mut output = Vec::new();

        run(&mut session, input, &mut output).await.unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "OK password\n");
    }
}
