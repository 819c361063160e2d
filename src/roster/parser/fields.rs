//! Raw-token to typed-field conversions shared by the command parsers.
//!
//! Each function trims its input and hands it to the field's constructor,
//! so a parse failure always carries that field's constraint message.

use crate::error::ParseError;
use crate::model::{Address, Email, Injury, Name, Phone, Position, Tag, Team};
use std::collections::BTreeSet;

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::new(raw.trim())?)
}

pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Ok(Email::new(raw.trim())?)
}

pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(raw.trim())?)
}

pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::new(raw.trim())?)
}

pub fn parse_team(raw: &str) -> Result<Team, ParseError> {
    Ok(Team::new(raw.trim())?)
}

pub fn parse_position(raw: &str) -> Result<Position, ParseError> {
    Ok(Position::new(raw.trim())?)
}

/// An absent injury value means the player is fit.
pub fn parse_injury(raw: Option<&str>) -> Result<Injury, ParseError> {
    match raw {
        Some(raw) => Ok(Injury::new(raw.trim())?),
        None => Ok(Injury::default()),
    }
}

pub fn parse_tags<I: AsRef<str>>(raws: &[I]) -> Result<BTreeSet<Tag>, ParseError> {
    raws.iter()
        .map(|raw| Tag::new(raw.as_ref().trim()).map_err(ParseError::from))
        .collect()
}
