//! # Parsing Layer
//!
//! Turns one line of user input into a [`Command`].
//!
//! ```text
//! editemail pl/Sergio Ramos e/iamramos@gmail.com
//! ^^^^^^^^^ ^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^
//! word      prefixed value  prefixed value
//! ```
//!
//! [`parse_command`] splits off the command word and hands the rest to the
//! command's own parser. Those parsers share the [`tokenizer`] and the typed
//! conversions in [`fields`].

use crate::commands::{add as add_cmd, help, list, update_email as update_email_cmd};
use crate::commands::{Command, EXIT_COMMAND_WORD};
use crate::error::ParseError;

pub mod add;
pub mod fields;
pub mod syntax;
pub mod tokenizer;
pub mod update_email;

/// Parses a full input line, command word included.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::command_format(help::MESSAGE_USAGE));
    }

    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (line, ""),
    };
    tracing::debug!(word, args, "dispatching");

    match word {
        add_cmd::COMMAND_WORD => Ok(Command::Add(add::parse(args)?)),
        update_email_cmd::COMMAND_WORD => Ok(Command::UpdateEmail(update_email::parse(args)?)),
        list::COMMAND_WORD => Ok(Command::List),
        help::COMMAND_WORD => Ok(Command::Help),
        EXIT_COMMAND_WORD => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
