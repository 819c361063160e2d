use super::PersonStore;
use crate::error::{Result, StoreError};
use crate::model::{Name, Person};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    persons: Vec<Person>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `persons`, rejecting repeated names.
    pub fn from_persons(persons: Vec<Person>) -> std::result::Result<Self, StoreError> {
        let mut store = Self::new();
        for person in persons {
            store.add(person)?;
        }
        Ok(store)
    }

    /// Seeds a store from a JSON array of persons. Every field goes through
    /// its validator during deserialization.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let persons: Vec<Person> = serde_json::from_str(&content)?;
        let store = Self::from_persons(persons)?;
        tracing::info!(path = %path.display(), count = store.persons.len(), "loaded roster");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn position(&self, name: &Name) -> Option<usize> {
        self.persons.iter().position(|p| p.name() == name)
    }
}

impl PersonStore for InMemoryStore {
    fn get_by_name(&self, name: &Name) -> std::result::Result<Person, StoreError> {
        self.position(name)
            .map(|idx| self.persons[idx].clone())
            .ok_or_else(|| StoreError::NotFound(name.clone()))
    }

    fn replace(
        &mut self,
        target: &Person,
        edited: Person,
    ) -> std::result::Result<(), StoreError> {
        let idx = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| StoreError::NotFound(target.name().clone()))?;

        if edited.name() != target.name() && self.position(edited.name()).is_some() {
            return Err(StoreError::Duplicate(edited.name().clone()));
        }

        tracing::info!(name = %target.name(), "replaced player");
        self.persons[idx] = edited;
        Ok(())
    }

    fn add(&mut self, person: Person) -> std::result::Result<(), StoreError> {
        if self.position(person.name()).is_some() {
            return Err(StoreError::Duplicate(person.name().clone()));
        }
        tracing::info!(name = %person.name(), "added player");
        self.persons.push(person);
        Ok(())
    }

    fn list(&self) -> Vec<Person> {
        self.persons.clone()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Address, Email, Injury, Phone, Position, Tag, Team};
    use std::collections::BTreeSet;

    /// Builds a valid person, overriding only name and email.
    pub fn person(name: &str, email: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new(email).unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            Team::new("Red Lions").unwrap(),
            BTreeSet::from([Tag::new("friends").unwrap()]),
            Position::new("FW").unwrap(),
            Injury::new("Pulled hamstring").unwrap(),
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_person(mut self, name: &str, email: &str) -> Self {
            self.store.add(person(name, email)).unwrap();
            self
        }

        pub fn with_players(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Test Player {}", i + 1);
                let email = format!("player{}@example.com", i + 1);
                self.store.add(person(&name, &email)).unwrap();
            }
            self
        }
    }
}
