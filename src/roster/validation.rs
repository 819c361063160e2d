//! Format rules for player fields.
//!
//! Every check here is a pure function over `&str`. The typed wrappers in
//! [`crate::model`] call into these at construction time, so a value that
//! exists is a value that passed.
//!
//! Email addresses follow `local-part@domain`:
//! - The local part is alphanumeric runs joined by single `+`, `_`, `.` or `-`
//!   characters, and cannot start or end with one of them
//! - The domain is at least two labels separated by `.`
//! - Each label is alphanumeric runs joined by single hyphens
//! - The last label is at least two characters long

const LOCAL_PART_SPECIALS: [char; 4] = ['+', '_', '.', '-'];

/// Validates an email address.
///
/// # Examples
/// ```
/// use roster::validation::validate_email;
///
/// assert!(validate_email("amy@example.com").is_ok());
/// assert!(validate_email("first.last+tag@mail.example.org").is_ok());
///
/// assert!(validate_email("amy@example").is_err());
/// assert!(validate_email("amy example.com").is_err());
/// assert!(validate_email(".amy@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), EmailValidationError> {
    if let Some(ch) = email.chars().find(|c| c.is_whitespace()) {
        return Err(EmailValidationError::Whitespace(ch));
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(EmailValidationError::MissingAt),
    };
    if domain.contains('@') {
        return Err(EmailValidationError::MultipleAt);
    }

    validate_local_part(local)?;
    validate_domain(domain)
}

fn validate_local_part(local: &str) -> Result<(), EmailValidationError> {
    if local.is_empty() {
        return Err(EmailValidationError::EmptyLocalPart);
    }

    let mut prev_was_special = true;
    for ch in local.chars() {
        if LOCAL_PART_SPECIALS.contains(&ch) {
            if prev_was_special {
                return Err(EmailValidationError::MisplacedSpecial(ch));
            }
            prev_was_special = true;
        } else if ch.is_ascii_alphanumeric() {
            prev_was_special = false;
        } else {
            return Err(EmailValidationError::InvalidLocalCharacter(ch));
        }
    }

    if prev_was_special {
        // Only reachable with a trailing special character.
        let last = local.chars().last().unwrap_or('.');
        return Err(EmailValidationError::MisplacedSpecial(last));
    }

    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), EmailValidationError> {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(EmailValidationError::DomainWithoutDot);
    }

    for label in &labels {
        if !is_valid_domain_label(label) {
            return Err(EmailValidationError::InvalidDomainLabel(label.to_string()));
        }
    }

    match labels.last() {
        Some(last) if last.chars().count() >= 2 => Ok(()),
        _ => Err(EmailValidationError::ShortTopLevelLabel),
    }
}

fn is_valid_domain_label(label: &str) -> bool {
    let mut prev_was_hyphen = true;
    for ch in label.chars() {
        if ch == '-' {
            if prev_was_hyphen {
                return false;
            }
            prev_was_hyphen = true;
        } else if ch.is_ascii_alphanumeric() {
            prev_was_hyphen = false;
        } else {
            return false;
        }
    }
    // Empty labels and trailing hyphens both end here.
    !prev_was_hyphen
}

/// Error type for email validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// Contains a whitespace character
    Whitespace(char),
    /// No `@` separating local part and domain
    MissingAt,
    /// More than one `@`
    MultipleAt,
    /// Nothing before the `@`
    EmptyLocalPart,
    /// Local part contains a character outside the allowed set
    InvalidLocalCharacter(char),
    /// Special character at an edge of the local part, or doubled
    MisplacedSpecial(char),
    /// Domain has a single label
    DomainWithoutDot,
    /// A domain label is empty or malformed
    InvalidDomainLabel(String),
    /// Last domain label is shorter than two characters
    ShortTopLevelLabel,
}

impl std::fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailValidationError::Whitespace(ch) => {
                write!(f, "email contains whitespace {:?}", ch)
            }
            EmailValidationError::MissingAt => write!(f, "email is missing '@'"),
            EmailValidationError::MultipleAt => write!(f, "email contains more than one '@'"),
            EmailValidationError::EmptyLocalPart => write!(f, "email local part is empty"),
            EmailValidationError::InvalidLocalCharacter(ch) => {
                write!(f, "email local part contains invalid character '{}'", ch)
            }
            EmailValidationError::MisplacedSpecial(ch) => {
                write!(f, "email local part has a misplaced '{}'", ch)
            }
            EmailValidationError::DomainWithoutDot => {
                write!(f, "email domain must contain at least one '.'")
            }
            EmailValidationError::InvalidDomainLabel(label) => {
                write!(f, "email domain label '{}' is invalid", label)
            }
            EmailValidationError::ShortTopLevelLabel => {
                write!(f, "email domain must end with a label of at least 2 characters")
            }
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// Names start with an ASCII alphanumeric character and contain only
/// ASCII alphanumerics and spaces.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
        }
        _ => false,
    }
}

/// Phone numbers are digits only, at least three of them.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() >= 3 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Addresses can be anything that isn't blank.
pub fn is_valid_address(address: &str) -> bool {
    !address.trim().is_empty()
}

/// Team names share the name rule.
pub fn is_valid_team(team: &str) -> bool {
    is_valid_name(team)
}

/// Tags are a single alphanumeric word.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric())
}

pub const POSITIONS: [&str; 4] = ["GK", "DF", "MF", "FW"];

/// Positions are one of the short codes in [`POSITIONS`].
pub fn is_valid_position(position: &str) -> bool {
    POSITIONS.contains(&position)
}

/// Injury status is free text that isn't blank.
pub fn is_valid_injury(injury: &str) -> bool {
    !injury.trim().is_empty()
}
