//! `editemail`: replace a player's email address.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::CommandError;
use crate::model::{Email, FieldUpdate, Name};
use crate::store::PersonStore;

pub const COMMAND_WORD: &str = "editemail";

pub const MESSAGE_USAGE: &str = "editemail: Changes this person's email.\n\
     Parameters: pl/PLAYER e/NEW EMAIL \
     Example: editemail pl/Sergio Ramos e/iamramos@gmail.com";

/// Locates a player by name and gives them a new email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEmailCommand {
    name: Name,
    email: Email,
}

impl UpdateEmailCommand {
    pub fn new(name: Name, email: Email) -> Self {
        Self { name, email }
    }

    pub fn execute<S: PersonStore>(&self, store: &mut S) -> Result<CmdResult, CommandError> {
        let target = store
            .get_by_name(&self.name)
            .map_err(|_| CommandError::PersonNotFound(self.name.clone()))?;

        // The email is checked again right before it reaches the store.
        let raw = self.email.to_string();
        let email = Email::new(raw.as_str()).map_err(|_| CommandError::InvalidEmail(raw.clone()))?;

        let edited = target.with_field(FieldUpdate::Email(email));
        store.replace(&target, edited.clone())?;
        tracing::debug!(name = %self.name, email = %raw, "email updated");

        let mut result = CmdResult::default().with_affected_persons(vec![edited]);
        result.add_message(CmdMessage::success(format!(
            "Updated {} email to {}.",
            self.name, raw
        )));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::model::Person;
    use crate::store::memory::fixtures::{person, StoreFixture};

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    fn email(s: &str) -> Email {
        Email::new(s).unwrap()
    }

    /// Records the arguments of every `replace` call.
    #[derive(Default)]
    struct RecordingStore {
        person: Option<Person>,
        replaced: Vec<(Person, Person)>,
    }

    impl PersonStore for RecordingStore {
        fn get_by_name(&self, query: &Name) -> Result<Person, StoreError> {
            self.person
                .clone()
                .filter(|p| p.name() == query)
                .ok_or_else(|| StoreError::NotFound(query.clone()))
        }

        fn replace(&mut self, target: &Person, edited: Person) -> Result<(), StoreError> {
            self.replaced.push((target.clone(), edited));
            Ok(())
        }

        fn add(&mut self, _person: Person) -> Result<(), StoreError> {
            unreachable!("editemail never adds")
        }

        fn list(&self) -> Vec<Person> {
            self.person.iter().cloned().collect()
        }
    }

    #[test]
    fn execute_person_exists_updates_email() {
        let amy = person("Amy Bee", "old@x.com");
        let mut store = RecordingStore {
            person: Some(amy.clone()),
            ..Default::default()
        };

        let command = UpdateEmailCommand::new(name("Amy Bee"), email("amy@example.com"));
        let result = command.execute(&mut store).unwrap();

        assert_eq!(result.feedback(), Some("Updated Amy Bee email to amy@example.com."));
        assert_eq!(store.replaced.len(), 1);
        let (target, edited) = &store.replaced[0];
        assert_eq!(target, &amy);
        assert_eq!(edited.email(), &email("amy@example.com"));
        assert_eq!(edited.name(), amy.name());
        assert_eq!(edited.phone(), amy.phone());
        assert_eq!(edited.address(), amy.address());
        assert_eq!(edited.team(), amy.team());
        assert_eq!(edited.tags(), amy.tags());
        assert_eq!(edited.position(), amy.position());
        assert_eq!(edited.injury(), amy.injury());
        assert_eq!(
            edited,
            &amy.with_field(FieldUpdate::Email(email("amy@example.com")))
        );
        assert_eq!(result.affected_persons, vec![edited.clone()]);
    }

    #[test]
    fn execute_person_missing_fails_with_name() {
        let mut store = RecordingStore::default();
        let command = UpdateEmailCommand::new(name("Non Existent"), email("valid@example.com"));

        let err = command.execute(&mut store).unwrap_err();
        assert_eq!(err, CommandError::PersonNotFound(name("Non Existent")));
        assert_eq!(err.to_string(), "No player named Non Existent was found.");
        assert!(store.replaced.is_empty());
    }

    #[test]
    fn execute_replaces_only_the_target() {
        let mut store = StoreFixture::new()
            .with_players(2)
            .with_person("Amy Bee", "old@x.com")
            .store;
        let before = store.list();

        UpdateEmailCommand::new(name("Amy Bee"), email("amy@example.com"))
            .execute(&mut store)
            .unwrap();

        let after = store.list();
        assert_eq!(after[..2], before[..2]);
        assert_eq!(after[2].email().as_str(), "amy@example.com");
        assert_eq!(
            after[2],
            before[2].with_field(FieldUpdate::Email(email("amy@example.com")))
        );
    }

    #[test]
    fn execute_with_same_email_still_succeeds() {
        let mut store = StoreFixture::new()
            .with_person("Amy Bee", "amy@example.com")
            .store;
        let result = UpdateEmailCommand::new(name("Amy Bee"), email("amy@example.com"))
            .execute(&mut store)
            .unwrap();
        assert_eq!(result.feedback(), Some("Updated Amy Bee email to amy@example.com."));
    }

    #[test]
    fn invalid_email_error_embeds_raw_value() {
        let err = CommandError::InvalidEmail("bad@@mail".into());
        assert_eq!(err.to_string(), "bad@@mail is an invalid email");
    }

    #[test]
    #[allow(clippy::eq_op)]
    fn equality() {
        let sergio = name("Sergio Ramos");
        let leo = name("Lionel Messi");
        let e1 = email("a@example.com");
        let e2 = email("b@example.com");

        let c1 = UpdateEmailCommand::new(sergio.clone(), e1.clone());
        let c1_copy = UpdateEmailCommand::new(sergio.clone(), e1.clone());
        let c2 = UpdateEmailCommand::new(leo, e1);
        let c3 = UpdateEmailCommand::new(sergio, e2);

        assert_eq!(c1, c1);
        assert_eq!(c1, c1_copy);
        assert_ne!(c1, c2);
        assert_ne!(c1, c3);
    }

    #[test]
    fn usage_mentions_both_prefixes() {
        assert!(MESSAGE_USAGE.starts_with("editemail: Changes this person's email.\n"));
        assert!(MESSAGE_USAGE.contains("Parameters: pl/PLAYER e/NEW EMAIL Example:"));
    }
}
