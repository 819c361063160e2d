use crate::error::FieldError;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Declares a string newtype whose only constructor runs `$check`.
macro_rules! validated_field {
    ($(#[$meta:meta])* $ty:ident, $field:literal, $check:path, $constraints:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty(String);

        impl $ty {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
                let value = value.into();
                if !$check(&value) {
                    return Err(FieldError {
                        field: $field,
                        constraints: Self::MESSAGE_CONSTRAINTS,
                    });
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_field!(
    /// A player's name, used as the roster lookup key.
    Name,
    "name",
    validation::is_valid_name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_field!(
    Phone,
    "phone",
    validation::is_valid_phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long"
);

validated_field!(
    Address,
    "address",
    validation::is_valid_address,
    "Addresses can take any values, and it should not be blank"
);

validated_field!(
    Team,
    "team",
    validation::is_valid_team,
    "Team names should only contain alphanumeric characters and spaces, and it should not be blank"
);

validated_field!(
    Tag,
    "tag",
    validation::is_valid_tag,
    "Tags names should be alphanumeric"
);

validated_field!(
    /// Playing position, one of [`validation::POSITIONS`].
    Position,
    "position",
    validation::is_valid_position,
    "Positions should be one of GK, DF, MF or FW"
);

validated_field!(
    Injury,
    "injury",
    validation::is_valid_injury,
    "Injury status can take any values, and it should not be blank"
);

impl Default for Injury {
    /// A player with no reported injury.
    fn default() -> Self {
        Self(String::from("FIT"))
    }
}

validated_field!(
    /// A contact email address. See [`validation::validate_email`] for the rule.
    Email,
    "email",
    is_valid_email,
    "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
     1. The local-part should only contain alphanumeric characters and these special characters, \
     excluding the parentheses, (+_.-). The local-part may not start or end with any special \
     characters, and special characters may not be adjacent.\n\
     2. This is followed by a '@' and then a domain name. The domain name is made up of at least \
     two domain labels separated by periods.\n\
     The domain name must:\n    \
     - end with a domain label at least 2 characters long\n    \
     - have each domain label start and end with alphanumeric characters\n    \
     - have each domain label consist of alphanumeric characters, separated only by hyphens, if any."
);

fn is_valid_email(value: &str) -> bool {
    match validation::validate_email(value) {
        Ok(()) => true,
        Err(violation) => {
            tracing::debug!(email = value, %violation, "rejected email");
            false
        }
    }
}

/// A single non-identity field of a [`Person`], already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Phone(Phone),
    Email(Email),
    Address(Address),
    Team(Team),
    Tags(BTreeSet<Tag>),
    Position(Position),
    Injury(Injury),
}

/// A player in the roster.
///
/// Persons are immutable values; edits go through [`Person::with_field`]
/// and the store swaps the old value for the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    team: Team,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    position: Position,
    #[serde(default)]
    injury: Injury,
}

impl Person {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        team: Team,
        tags: BTreeSet<Tag>,
        position: Position,
        injury: Injury,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            team,
            tags,
            position,
            injury,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn injury(&self) -> &Injury {
        &self.injury
    }

    /// Returns a copy of this person with one field replaced.
    pub fn with_field(&self, update: FieldUpdate) -> Person {
        let mut edited = self.clone();
        match update {
            FieldUpdate::Phone(phone) => edited.phone = phone,
            FieldUpdate::Email(email) => edited.email = email,
            FieldUpdate::Address(address) => edited.address = address,
            FieldUpdate::Team(team) => edited.team = team,
            FieldUpdate::Tags(tags) => edited.tags = tags,
            FieldUpdate::Position(position) => edited.position = position,
            FieldUpdate::Injury(injury) => edited.injury = injury,
        }
        edited
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Team: {}; Position: {}; Injury: {}; Tags: ",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.team,
            self.position,
            self.injury
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amy() -> Person {
        Person::new(
            Name::new("Amy Bee").unwrap(),
            Phone::new("85355255").unwrap(),
            Email::new("old@x.com").unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            Team::new("Red Lions").unwrap(),
            [Tag::new("captain").unwrap()].into_iter().collect(),
            Position::new("DF").unwrap(),
            Injury::new("Sprained ankle").unwrap(),
        )
    }

    #[test]
    fn constructors_reject_invalid_values() {
        assert!(Name::new("").is_err());
        assert!(Email::new("not-an-email").is_err());
        assert!(Phone::new("12").is_err());
        assert!(Address::new(" ").is_err());
        assert!(Team::new("#1").is_err());
        assert!(Tag::new("two words").is_err());
        assert!(Position::new("Goalkeeper").is_err());
        assert!(Injury::new("").is_err());
    }

    #[test]
    fn injury_defaults_to_fit() {
        assert_eq!(Injury::default().as_str(), "FIT");
    }

    #[test]
    fn constructor_error_carries_constraints() {
        let err = Email::new("amy@example").unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.constraints, Email::MESSAGE_CONSTRAINTS);
        assert_eq!(err.to_string(), Email::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn with_field_replaces_only_that_field() {
        let person = amy();
        let email = Email::new("amy@example.com").unwrap();
        let edited = person.with_field(FieldUpdate::Email(email.clone()));

        assert_eq!(edited.email(), &email);
        assert_eq!(edited.name(), person.name());
        assert_eq!(edited.phone(), person.phone());
        assert_eq!(edited.address(), person.address());
        assert_eq!(edited.team(), person.team());
        assert_eq!(edited.tags(), person.tags());
        assert_eq!(edited.position(), person.position());
        assert_eq!(edited.injury(), person.injury());
        // The source value is left as it was.
        assert_eq!(person.email().as_str(), "old@x.com");
    }

    #[test]
    fn with_field_replaces_tags_wholesale() {
        let person = amy();
        let edited = person.with_field(FieldUpdate::Tags(BTreeSet::new()));
        assert!(edited.tags().is_empty());
        assert_eq!(edited.email(), person.email());
    }

    #[test]
    fn with_field_replaces_position_and_injury() {
        let person = amy();
        let moved = person.with_field(FieldUpdate::Position(Position::new("MF").unwrap()));
        assert_eq!(moved.position().as_str(), "MF");
        assert_eq!(moved.injury(), person.injury());

        let healed = person.with_field(FieldUpdate::Injury(Injury::default()));
        assert_eq!(healed.injury().as_str(), "FIT");
        assert_eq!(healed.position(), person.position());
    }

    #[test]
    fn display_lists_every_field() {
        assert_eq!(
            amy().to_string(),
            "Amy Bee; Phone: 85355255; Email: old@x.com; \
             Address: 123, Jurong West Ave 6, #08-111; Team: Red Lions; \
             Position: DF; Injury: Sprained ankle; Tags: [captain]"
        );
    }

    #[test]
    fn deserialization_validates_fields() {
        let json = r#"{
            "name": "Amy Bee",
            "phone": "85355255",
            "email": "amy@example.com",
            "address": "Somewhere 1",
            "team": "Red Lions",
            "position": "FW"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.email().as_str(), "amy@example.com");
        assert!(person.tags().is_empty());
        assert_eq!(person.position().as_str(), "FW");
        assert_eq!(person.injury(), &Injury::default());

        let no_position = json.replace(",\n            \"position\": \"FW\"", "");
        assert!(serde_json::from_str::<Person>(&no_position).is_err());

        let bad = json.replace("amy@example.com", "amy at example");
        let err = serde_json::from_str::<Person>(&bad).unwrap_err();
        assert!(err.to_string().contains("Emails should be of the format"));
    }
}
