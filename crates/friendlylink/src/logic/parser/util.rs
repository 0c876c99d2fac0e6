//! Helpers that turn raw argument text into validated values.
//!
//! All inputs are trimmed before validation.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::logic::Index;
use crate::model::{Address, Age, Email, Name, Nric, Phone, RiskLevel, Tag};

/// Shown when an index is not a positive integer.
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parse a one-based index.
///
/// # Errors
///
/// Returns a parse error if `raw` is not a positive integer.
pub fn parse_index(raw: &str) -> Result<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(MESSAGE_INVALID_INDEX));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| Error::parse(MESSAGE_INVALID_INDEX))
}

/// Parse a name.
///
/// # Errors
///
/// Returns the name constraint message if invalid.
pub fn parse_name(raw: &str) -> Result<Name> {
    Name::parse(raw.trim())
}

/// Parse a phone number.
///
/// # Errors
///
/// Returns the phone constraint message if invalid.
pub fn parse_phone(raw: &str) -> Result<Phone> {
    Phone::parse(raw.trim())
}

/// Parse an email address.
///
/// # Errors
///
/// Returns the email constraint message if invalid.
pub fn parse_email(raw: &str) -> Result<Email> {
    Email::parse(raw.trim())
}

/// Parse an address.
///
/// # Errors
///
/// Returns the address constraint message if invalid.
pub fn parse_address(raw: &str) -> Result<Address> {
    Address::parse(raw.trim())
}

/// Parse an NRIC.
///
/// # Errors
///
/// Returns the NRIC constraint message if invalid.
pub fn parse_nric(raw: &str) -> Result<Nric> {
    Nric::parse(raw.trim())
}

/// Parse an age.
///
/// # Errors
///
/// Returns the age constraint message if invalid.
pub fn parse_age(raw: &str) -> Result<Age> {
    Age::parse(raw.trim())
}

/// Parse a risk level.
///
/// # Errors
///
/// Returns the risk level constraint message if invalid.
pub fn parse_risk_level(raw: &str) -> Result<RiskLevel> {
    RiskLevel::parse(raw.trim())
}

/// Parse a single tag.
///
/// # Errors
///
/// Returns the tag constraint message if invalid.
pub fn parse_tag(raw: &str) -> Result<Tag> {
    Tag::parse(raw.trim())
}

/// Parse a collection of tags, dropping repeats.
///
/// # Errors
///
/// Returns the tag constraint message if any tag is invalid.
pub fn parse_tags<'a>(raw: impl IntoIterator<Item = &'a str>) -> Result<BTreeSet<Tag>> {
    raw.into_iter().map(parse_tag).collect()
}

/// Parse tags for an edit, where a single empty value clears the set.
///
/// Returns `None` when no tag values were given at all.
///
/// # Errors
///
/// Returns the tag constraint message if any tag is invalid.
pub fn parse_tags_for_edit(raw: &[&str]) -> Result<Option<BTreeSet<Tag>>> {
    match raw {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(raw.iter().copied()).map(Some),
    }
}
