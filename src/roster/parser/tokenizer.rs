//! Splits a raw argument string into prefixed values.
//!
//! Given `pl/Amy Bee e/amy@example.com` and the prefixes `pl/` and `e/`,
//! the tokenizer yields an empty preamble, `Amy Bee` under `pl/` and
//! `amy@example.com` under `e/`.
//!
//! A prefix only counts when it begins the input or follows whitespace, so
//! `xe/` inside a value is left alone. Values run until the next recognized
//! prefix or the end of input, and are trimmed.

use crate::error::ParseError;
use crate::parser::syntax::Prefix;
use std::collections::HashMap;

/// The result of tokenizing: a preamble plus every value seen per prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// First value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|p| self.all_values(*p).len() > 1)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicateFields(duplicated))
        }
    }
}

pub fn tokenize(input: &str, prefixes: &[Prefix]) -> ArgumentMap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            prefix_positions(input, *prefix)
                .into_iter()
                .map(move |pos| (pos, *prefix))
        })
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(input.len(), |(pos, _)| *pos);
    let mut map = ArgumentMap {
        preamble: input[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(input.len(), |(next, _)| *next);
        let value = input[value_start..value_end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    map
}

fn prefix_positions(input: &str, prefix: Prefix) -> Vec<usize> {
    input
        .match_indices(prefix.as_str())
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            input[..pos]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace)
        })
        .collect()
}
