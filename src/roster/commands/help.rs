use crate::commands::{add, list, update_email, CmdMessage, CmdResult, EXIT_USAGE};

pub const COMMAND_WORD: &str = "help";
pub const MESSAGE_USAGE: &str = "help: Shows how to use every command.";

/// Usage text for every command, in the order `help` prints them.
pub const ALL_USAGES: [&str; 5] = [
    add::MESSAGE_USAGE,
    update_email::MESSAGE_USAGE,
    list::MESSAGE_USAGE,
    MESSAGE_USAGE,
    EXIT_USAGE,
];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default();
    for usage in ALL_USAGES {
        result.add_message(CmdMessage::info(usage));
    }
    result
}
