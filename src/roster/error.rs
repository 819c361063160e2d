use crate::model::Name;
use crate::parser::syntax::Prefix;
use thiserror::Error;

/// A field value that failed its format rule. Displays as the field's
/// constraint description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{constraints}")]
pub struct FieldError {
    pub field: &'static str,
    pub constraints: &'static str,
}

/// Errors raised while turning a raw line into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },

    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.0)
    )]
    DuplicateFields(Vec<Prefix>),

    #[error(transparent)]
    InvalidFormat(#[from] FieldError),

    #[error("Unknown command")]
    UnknownCommand(String),
}

impl ParseError {
    pub fn command_format(usage: &'static str) -> Self {
        ParseError::InvalidCommandFormat { usage }
    }
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Errors raised while executing a parsed command against a store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("No player named {0} was found.")]
    PersonNotFound(Name),

    #[error("{0} is an invalid email")]
    InvalidEmail(String),

    #[error("A player named {0} already exists in the roster.")]
    DuplicatePerson(Name),
}

/// Errors reported by a [`crate::store::PersonStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Player not found: {0}")]
    NotFound(Name),

    #[error("Player already stored: {0}")]
    Duplicate(Name),
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => CommandError::PersonNotFound(name),
            StoreError::Duplicate(name) => CommandError::DuplicatePerson(name),
        }
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
