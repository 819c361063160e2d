use crate::commands::{CmdMessage, CmdResult};
use crate::store::PersonStore;

pub const COMMAND_WORD: &str = "list";
pub const MESSAGE_USAGE: &str = "list: Lists every player in the roster.";

pub fn run<S: PersonStore>(store: &S) -> CmdResult {
    let persons = store.list();
    let mut result = CmdResult::default();

    if persons.is_empty() {
        result.add_message(CmdMessage::warning("The roster is empty."));
    } else {
        result.add_message(CmdMessage::info("Listed all players"));
    }

    result.with_listed_persons(persons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_in_roster_order() {
        let store = StoreFixture::new().with_players(3).store;
        let result = run(&store);

        let names: Vec<&str> = result
            .listed_persons
            .iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(names, ["Test Player 1", "Test Player 2", "Test Player 3"]);
        assert_eq!(result.feedback(), Some("Listed all players"));
    }

    #[test]
    fn warns_on_empty_roster() {
        let store = StoreFixture::new().store;
        let result = run(&store);

        assert!(result.listed_persons.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
