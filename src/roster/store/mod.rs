//! # Storage Layer
//!
//! Commands never touch a concrete collection. They work against the
//! [`PersonStore`] trait, which keeps them testable and leaves persistence
//! to whoever embeds the library.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed roster, optionally seeded from a
//!   JSON file. Nothing is ever written back.
//!
//! ## Identity
//!
//! A [`Person`] is identified by its [`Name`]. Stores reject a second person
//! with the same name, and `replace` swaps a stored person for an edited copy
//! in place, keeping roster order.

use crate::error::StoreError;
use crate::model::{Name, Person};

pub mod memory;

/// Abstract interface for the player roster.
pub trait PersonStore {
    /// Look up a person by exact name.
    fn get_by_name(&self, name: &Name) -> Result<Person, StoreError>;

    /// Swap `target` for `edited`. `target` must currently be stored.
    fn replace(&mut self, target: &Person, edited: Person) -> Result<(), StoreError>;

    /// Add a person whose name is not yet taken.
    fn add(&mut self, person: Person) -> Result<(), StoreError>;

    /// Every person, in roster order.
    fn list(&self) -> Vec<Person>;
}
