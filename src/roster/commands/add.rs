//! `add`: put a new player on the roster.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::CommandError;
use crate::model::Person;
use crate::store::PersonStore;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a player to the roster.\n\
     Parameters: pl/PLAYER p/PHONE e/EMAIL a/ADDRESS tm/TEAM pos/POSITION [i/INJURY] [t/TAG]...\n\
     Example: add pl/Sergio Ramos p/98765432 e/iamramos@gmail.com \
     a/Concha Espina 1, Madrid tm/Real Madrid pos/DF t/captain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn execute<S: PersonStore>(&self, store: &mut S) -> Result<CmdResult, CommandError> {
        store.add(self.person.clone())?;

        let mut result = CmdResult::default().with_affected_persons(vec![self.person.clone()]);
        result.add_message(CmdMessage::success(format!(
            "New player added: {}",
            self.person
        )));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Name;
    use crate::store::memory::fixtures::{person, StoreFixture};

    #[test]
    fn adds_new_player() {
        let mut store = StoreFixture::new().with_players(1).store;
        let amy = person("Amy Bee", "amy@example.com");

        let result = AddCommand::new(amy.clone()).execute(&mut store).unwrap();

        assert_eq!(store.list().last(), Some(&amy));
        assert_eq!(result.affected_persons, vec![amy.clone()]);
        assert_eq!(
            result.feedback(),
            Some(format!("New player added: {}", amy).as_str())
        );
    }

    #[test]
    fn rejects_taken_name() {
        let mut store = StoreFixture::new()
            .with_person("Amy Bee", "amy@example.com")
            .store;

        let err = AddCommand::new(person("Amy Bee", "other@example.com"))
            .execute(&mut store)
            .unwrap_err();

        assert_eq!(
            err,
            CommandError::DuplicatePerson(Name::new("Amy Bee").unwrap())
        );
        assert_eq!(
            err.to_string(),
            "A player named Amy Bee already exists in the roster."
        );
        assert_eq!(store.len(), 1);
    }
}
