//! Argument prefixes understood by roster commands.

use std::fmt;

/// A literal marker such as `pl/` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_PLAYER: Prefix = Prefix::new("pl/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TEAM: Prefix = Prefix::new("tm/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_POSITION: Prefix = Prefix::new("pos/");
pub const PREFIX_INJURY: Prefix = Prefix::new("i/");
