use crate::commands::add::{AddCommand, MESSAGE_USAGE};
use crate::error::ParseError;
use crate::model::Person;
use crate::parser::fields::{
    parse_address, parse_email, parse_injury, parse_name, parse_phone, parse_position,
    parse_tags, parse_team,
};
use crate::parser::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_INJURY, PREFIX_PHONE, PREFIX_PLAYER, PREFIX_POSITION,
    PREFIX_TAG, PREFIX_TEAM,
};
use crate::parser::tokenizer::tokenize;

/// Parses the arguments of `add`. Every prefix except `t/` is single-valued;
/// `t/` and `i/` are optional.
pub fn parse(args: &str) -> Result<AddCommand, ParseError> {
    let single = [
        PREFIX_PLAYER,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_TEAM,
        PREFIX_POSITION,
        PREFIX_INJURY,
    ];
    let mut prefixes = single.to_vec();
    prefixes.push(PREFIX_TAG);
    let map = tokenize(args, &prefixes);

    if !map.preamble().is_empty() {
        return Err(ParseError::command_format(MESSAGE_USAGE));
    }

    map.verify_no_duplicates(&single)?;

    let (Some(name), Some(phone), Some(email), Some(address), Some(team), Some(position)) = (
        map.value(PREFIX_PLAYER),
        map.value(PREFIX_PHONE),
        map.value(PREFIX_EMAIL),
        map.value(PREFIX_ADDRESS),
        map.value(PREFIX_TEAM),
        map.value(PREFIX_POSITION),
    ) else {
        return Err(ParseError::command_format(MESSAGE_USAGE));
    };

    let person = Person::new(
        parse_name(name)?,
        parse_phone(phone)?,
        parse_email(email)?,
        parse_address(address)?,
        parse_team(team)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
        parse_position(position)?,
        parse_injury(map.value(PREFIX_INJURY))?,
    );
    tracing::debug!(%person, "parsed add");

    Ok(AddCommand::new(person))
}
