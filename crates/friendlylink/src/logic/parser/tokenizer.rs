//! Splits an argument string into prefixed values.
//!
//! A prefix only counts when it starts the string or follows whitespace, so
//! `ic/` is not found inside `eic/`. The text before the first prefix is the
//! preamble.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::syntax::Prefix;

/// Values found for each prefix, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check if `prefix` appeared at all.
    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Check if every prefix in `prefixes` appeared.
    #[must_use]
    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }

    /// Text that came before the first prefix, trimmed.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Reject repeated single-valued prefixes.
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the repeated prefixes.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<()> {
        let repeated: Vec<String> = prefixes
            .iter()
            .filter(|p| self.values.get(*p).is_some_and(|v| v.len() > 1))
            .map(ToString::to_string)
            .collect();

        if repeated.is_empty() {
            Ok(())
        } else {
            Err(Error::parse(format!(
                "Multiple values specified for the following single-valued field(s): {}",
                repeated.join(" ")
            )))
        }
    }
}

/// Tokenize `args` against the given prefixes.
#[must_use]
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = find_all_prefix_positions(args, prefixes);
    positions.sort_by_key(|(start, _)| *start);

    let mut map = ArgumentMultimap {
        preamble: positions
            .first()
            .map_or(args, |(start, _)| &args[..*start])
            .trim()
            .to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        let value = args[value_start..value_end].trim().to_string();
        map.values.entry(*prefix).or_default().push(value);
    }

    map
}

fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    for prefix in prefixes {
        for (index, _) in args.match_indices(prefix.as_str()) {
            let at_boundary = args[..index]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary {
                positions.push((index, *prefix));
            }
        }
    }
    positions
}
