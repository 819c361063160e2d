use crate::error::CommandError;
use crate::model::Person;
use crate::store::PersonStore;

pub mod add;
pub mod help;
pub mod list;
pub mod update_email;

pub use add::AddCommand;
pub use update_email::UpdateEmailCommand;

pub const EXIT_COMMAND_WORD: &str = "exit";
pub const EXIT_USAGE: &str = "exit: Leaves the roster.";
pub const MESSAGE_EXIT: &str = "Exiting roster as requested ...";

/// A fully parsed, ready to run command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    UpdateEmail(UpdateEmailCommand),
    List,
    Help,
    Exit,
}

impl Command {
    pub fn execute<S: PersonStore>(&self, store: &mut S) -> Result<CmdResult, CommandError> {
        tracing::debug!(command = ?self, "executing");
        match self {
            Command::Add(cmd) => cmd.execute(store),
            Command::UpdateEmail(cmd) => cmd.execute(store),
            Command::List => Ok(list::run(store)),
            Command::Help => Ok(help::run()),
            Command::Exit => {
                let mut result = CmdResult::default().exiting();
                result.add_message(CmdMessage::info(MESSAGE_EXIT));
                Ok(result)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command did, for the caller to present however it likes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub affected_persons: Vec<Person>,
    pub listed_persons: Vec<Person>,
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_persons(mut self, persons: Vec<Person>) -> Self {
        self.affected_persons = persons;
        self
    }

    pub fn with_listed_persons(mut self, persons: Vec<Person>) -> Self {
        self.listed_persons = persons;
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Text of the first message, the user-facing feedback for most commands.
    pub fn feedback(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
