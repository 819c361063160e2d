use crate::commands::update_email::{UpdateEmailCommand, MESSAGE_USAGE};
use crate::error::ParseError;
use crate::parser::fields::{parse_email, parse_name};
use crate::parser::syntax::{PREFIX_EMAIL, PREFIX_PLAYER};
use crate::parser::tokenizer::tokenize;

/// Parses the arguments of `editemail`, e.g. `pl/Sergio Ramos e/iamramos@gmail.com`.
///
/// Checks run in a fixed order: stray preamble, repeated prefixes, missing
/// prefixes, then the values themselves. Field errors are returned as-is.
pub fn parse(args: &str) -> Result<UpdateEmailCommand, ParseError> {
    let prefixes = [PREFIX_PLAYER, PREFIX_EMAIL];
    let map = tokenize(args, &prefixes);

    if !map.preamble().is_empty() {
        return Err(ParseError::command_format(MESSAGE_USAGE));
    }

    map.verify_no_duplicates(&prefixes)?;

    let (Some(raw_name), Some(raw_email)) = (map.value(PREFIX_PLAYER), map.value(PREFIX_EMAIL))
    else {
        return Err(ParseError::command_format(MESSAGE_USAGE));
    };

    let name = parse_name(raw_name)?;
    let email = parse_email(raw_email)?;
    tracing::debug!(%name, %email, "parsed editemail");

    Ok(UpdateEmailCommand::new(name, email))
}
