//! Turns a line of user input into a [`Command`].
//!
//! The first whitespace-separated word selects the command; the rest is
//! tokenized into `prefix/value` arguments and validated field by field.

pub mod syntax;
pub mod tokenizer;
pub mod util;

use crate::error::{Error, Result};
use crate::logic::commands::{
    words, Command, EditElderlyDescriptor, EditVolunteerDescriptor, FindCriteria,
    ADD_ELDERLY_USAGE, ADD_VOLUNTEER_USAGE, DELETE_ELDERLY_USAGE, DELETE_VOLUNTEER_USAGE,
    EDIT_ELDERLY_USAGE, EDIT_VOLUNTEER_USAGE, FIND_USAGE, HELP_MESSAGE, MESSAGE_NOT_EDITED,
    PAIR_USAGE, UNPAIR_USAGE,
};
use crate::model::predicates::{
    AgeMatchesPredicate, MedicalQualificationContainsKeywordPredicate,
    NameContainsKeywordPredicate, NricMatchesPredicate, RiskLevelMatchesPredicate,
    TagContainsKeywordPredicate,
};
use crate::model::{Elderly, Pair, Volunteer};

use syntax::{
    Prefix, PREFIX_ADDRESS, PREFIX_AGE, PREFIX_ELDERLY_NRIC, PREFIX_EMAIL, PREFIX_MEDICAL_TAG,
    PREFIX_NAME, PREFIX_NRIC, PREFIX_PHONE, PREFIX_RISK, PREFIX_TAG, PREFIX_VOLUNTEER_NRIC,
};
use tokenizer::{tokenize, ArgumentMultimap};

const VOLUNTEER_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_NRIC,
    PREFIX_AGE,
    PREFIX_TAG,
    PREFIX_MEDICAL_TAG,
];

const ELDERLY_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_NRIC,
    PREFIX_AGE,
    PREFIX_RISK,
    PREFIX_TAG,
];

const SINGLE_VALUED_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_NRIC,
    PREFIX_AGE,
    PREFIX_RISK,
];

const FIND_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_NRIC,
    PREFIX_AGE,
    PREFIX_RISK,
    PREFIX_TAG,
    PREFIX_MEDICAL_TAG,
];

const PAIR_PREFIXES: &[Prefix] = &[PREFIX_ELDERLY_NRIC, PREFIX_VOLUNTEER_NRIC];

/// Parse one line of user input.
///
/// # Errors
///
/// Returns [`Error::UnknownCommand`] for an unrecognised command word, or a
/// parse / illegal-value error describing the first problem found.
pub fn parse_command(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_format(HELP_MESSAGE));
    }

    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match word {
        words::ADD_VOLUNTEER => parse_add_volunteer(args).map(Command::AddVolunteer),
        words::ADD_ELDERLY => parse_add_elderly(args).map(Command::AddElderly),
        words::DELETE_VOLUNTEER => util::parse_index(args)
            .map(Command::DeleteVolunteer)
            .map_err(|_| Error::invalid_format(DELETE_VOLUNTEER_USAGE)),
        words::DELETE_ELDERLY => util::parse_index(args)
            .map(Command::DeleteElderly)
            .map_err(|_| Error::invalid_format(DELETE_ELDERLY_USAGE)),
        words::EDIT_VOLUNTEER => parse_edit_volunteer(args),
        words::EDIT_ELDERLY => parse_edit_elderly(args),
        words::FIND => parse_find(args).map(Command::Find),
        words::PAIR => parse_pair(args, PAIR_USAGE).map(Command::Pair),
        words::UNPAIR => parse_pair(args, UNPAIR_USAGE).map(Command::Unpair),
        words::LIST => Ok(Command::List),
        words::CLEAR => Ok(Command::Clear),
        words::HELP => Ok(Command::Help),
        words::EXIT => Ok(Command::Exit),
        _ => Err(Error::UnknownCommand),
    }
}

/// Tokenize with a leading space so a prefix at the very start is found.
fn tokenize_args(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    tokenize(&format!(" {args}"), prefixes)
}

fn required<'a>(map: &'a ArgumentMultimap, prefix: Prefix, usage: &str) -> Result<&'a str> {
    map.value(prefix).ok_or_else(|| Error::invalid_format(usage))
}

fn parse_add_volunteer(args: &str) -> Result<Volunteer> {
    let map = tokenize_args(args, VOLUNTEER_PREFIXES);
    let mandatory = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_NRIC,
        PREFIX_AGE,
    ];
    if !map.are_present(&mandatory) || !map.preamble().is_empty() {
        return Err(Error::invalid_format(ADD_VOLUNTEER_USAGE));
    }
    map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES)?;

    Ok(Volunteer {
        name: util::parse_name(required(&map, PREFIX_NAME, ADD_VOLUNTEER_USAGE)?)?,
        phone: util::parse_phone(required(&map, PREFIX_PHONE, ADD_VOLUNTEER_USAGE)?)?,
        email: util::parse_email(required(&map, PREFIX_EMAIL, ADD_VOLUNTEER_USAGE)?)?,
        address: util::parse_address(required(&map, PREFIX_ADDRESS, ADD_VOLUNTEER_USAGE)?)?,
        nric: util::parse_nric(required(&map, PREFIX_NRIC, ADD_VOLUNTEER_USAGE)?)?,
        age: util::parse_age(required(&map, PREFIX_AGE, ADD_VOLUNTEER_USAGE)?)?,
        tags: util::parse_tags(map.all_values(PREFIX_TAG))?,
        medical_tags: util::parse_tags(map.all_values(PREFIX_MEDICAL_TAG))?,
    })
}

fn parse_add_elderly(args: &str) -> Result<Elderly> {
    let map = tokenize_args(args, ELDERLY_PREFIXES);
    let mandatory = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_NRIC,
        PREFIX_AGE,
        PREFIX_RISK,
    ];
    if !map.are_present(&mandatory) || !map.preamble().is_empty() {
        return Err(Error::invalid_format(ADD_ELDERLY_USAGE));
    }
    map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES)?;

    Ok(Elderly {
        name: util::parse_name(required(&map, PREFIX_NAME, ADD_ELDERLY_USAGE)?)?,
        phone: util::parse_phone(required(&map, PREFIX_PHONE, ADD_ELDERLY_USAGE)?)?,
        email: util::parse_email(required(&map, PREFIX_EMAIL, ADD_ELDERLY_USAGE)?)?,
        address: util::parse_address(required(&map, PREFIX_ADDRESS, ADD_ELDERLY_USAGE)?)?,
        nric: util::parse_nric(required(&map, PREFIX_NRIC, ADD_ELDERLY_USAGE)?)?,
        age: util::parse_age(required(&map, PREFIX_AGE, ADD_ELDERLY_USAGE)?)?,
        risk_level: util::parse_risk_level(required(&map, PREFIX_RISK, ADD_ELDERLY_USAGE)?)?,
        tags: util::parse_tags(map.all_values(PREFIX_TAG))?,
    })
}

fn parse_edit_volunteer(args: &str) -> Result<Command> {
    let map = tokenize_args(args, VOLUNTEER_PREFIXES);
    let index = util::parse_index(map.preamble())
        .map_err(|_| Error::invalid_format(EDIT_VOLUNTEER_USAGE))?;
    map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES)?;

    let descriptor = EditVolunteerDescriptor {
        name: map.value(PREFIX_NAME).map(util::parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(util::parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(util::parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(util::parse_address).transpose()?,
        nric: map.value(PREFIX_NRIC).map(util::parse_nric).transpose()?,
        age: map.value(PREFIX_AGE).map(util::parse_age).transpose()?,
        tags: util::parse_tags_for_edit(&map.all_values(PREFIX_TAG))?,
        medical_tags: util::parse_tags_for_edit(&map.all_values(PREFIX_MEDICAL_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(Error::parse(MESSAGE_NOT_EDITED));
    }

    Ok(Command::EditVolunteer { index, descriptor })
}

fn parse_edit_elderly(args: &str) -> Result<Command> {
    let map = tokenize_args(args, ELDERLY_PREFIXES);
    let index = util::parse_index(map.preamble())
        .map_err(|_| Error::invalid_format(EDIT_ELDERLY_USAGE))?;
    map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES)?;

    let descriptor = EditElderlyDescriptor {
        name: map.value(PREFIX_NAME).map(util::parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(util::parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(util::parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(util::parse_address).transpose()?,
        nric: map.value(PREFIX_NRIC).map(util::parse_nric).transpose()?,
        age: map.value(PREFIX_AGE).map(util::parse_age).transpose()?,
        risk_level: map.value(PREFIX_RISK).map(util::parse_risk_level).transpose()?,
        tags: util::parse_tags_for_edit(&map.all_values(PREFIX_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(Error::parse(MESSAGE_NOT_EDITED));
    }

    Ok(Command::EditElderly { index, descriptor })
}

fn parse_find(args: &str) -> Result<FindCriteria> {
    let map = tokenize_args(args, FIND_PREFIXES);
    if !map.preamble().is_empty() {
        return Err(Error::invalid_format(FIND_USAGE));
    }
    map.verify_no_duplicate_prefixes(FIND_PREFIXES)?;

    let criteria = FindCriteria {
        name: keyword(&map, PREFIX_NAME)?.map(NameContainsKeywordPredicate::new),
        nric: keyword(&map, PREFIX_NRIC)?
            .map(util::parse_nric)
            .transpose()?
            .map(NricMatchesPredicate::new),
        age: keyword(&map, PREFIX_AGE)?
            .map(util::parse_age)
            .transpose()?
            .map(AgeMatchesPredicate::new),
        tag: keyword(&map, PREFIX_TAG)?.map(TagContainsKeywordPredicate::new),
        risk_level: keyword(&map, PREFIX_RISK)?
            .map(util::parse_risk_level)
            .transpose()?
            .map(RiskLevelMatchesPredicate::new),
        medical_qualification: keyword(&map, PREFIX_MEDICAL_TAG)?
            .map(MedicalQualificationContainsKeywordPredicate::new),
    };
    if criteria.is_empty() {
        return Err(Error::invalid_format(FIND_USAGE));
    }
    Ok(criteria)
}

/// A find criterion's value; an empty value is a format error.
fn keyword(map: &ArgumentMultimap, prefix: Prefix) -> Result<Option<&str>> {
    match map.value(prefix) {
        Some("") => Err(Error::invalid_format(FIND_USAGE)),
        other => Ok(other),
    }
}

fn parse_pair(args: &str, usage: &str) -> Result<Pair> {
    let map = tokenize_args(args, PAIR_PREFIXES);
    if !map.are_present(PAIR_PREFIXES) || !map.preamble().is_empty() {
        return Err(Error::invalid_format(usage));
    }
    map.verify_no_duplicate_prefixes(PAIR_PREFIXES)?;

    Ok(Pair::new(
        util::parse_nric(required(&map, PREFIX_ELDERLY_NRIC, usage)?)?,
        util::parse_nric(required(&map, PREFIX_VOLUNTEER_NRIC, usage)?)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Index;
    use crate::model::{Nric, Phone, RiskLevel};
    use crate::testutil::alice_volunteer;

    const ALICE: &str = "add_volunteer n/Alice Pauline p/94351253 e/volunteer@example.com \
        a/123, Jurong West Ave 6, #08-111 ic/S1234567A ag/25 t/friends mt/CPR";

    #[test]
    fn test_parse_add_volunteer() {
        let command = parse_command(ALICE).unwrap();
        assert_eq!(command, Command::AddVolunteer(alice_volunteer()));
    }

    #[test]
    fn test_parse_add_volunteer_any_order() {
        let shuffled = "add_volunteer mt/CPR ag/25 ic/s1234567a t/friends n/Alice Pauline \
            a/123, Jurong West Ave 6, #08-111 e/volunteer@example.com p/94351253";
        assert_eq!(
            parse_command(shuffled).unwrap(),
            Command::AddVolunteer(alice_volunteer())
        );
    }

    #[test]
    fn test_parse_add_volunteer_missing_field() {
        let err = parse_command("add_volunteer n/Alice p/123").unwrap_err();
        assert!(err.to_string().starts_with("Invalid command format!"));
        assert!(err.to_string().contains(ADD_VOLUNTEER_USAGE));
    }

    #[test]
    fn test_parse_add_volunteer_invalid_value() {
        let bad_phone = ALICE.replace("p/94351253", "p/94a");
        let err = parse_command(&bad_phone).unwrap_err();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_parse_add_volunteer_duplicate_prefix() {
        let twice = format!("{ALICE} n/Bob");
        let err = parse_command(&twice).unwrap_err();
        assert!(err.to_string().contains("single-valued"));
    }

    #[test]
    fn test_parse_add_elderly() {
        let input = "add_elderly n/Bob Choo p/98765432 e/elderly@example.com \
            a/311, Clementi Ave 2, #02-25 ic/S7654321C ag/88 r/high";
        let command = parse_command(input).unwrap();
        assert_eq!(command, Command::AddElderly(crate::testutil::bob_elderly()));
    }

    #[test]
    fn test_parse_add_elderly_requires_risk() {
        let input = "add_elderly n/Bob Choo p/98765432 e/elderly@example.com \
            a/311, Clementi Ave 2, #02-25 ic/S7654321C ag/88";
        assert!(parse_command(input).is_err());
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(
            parse_command("delete_volunteer 2").unwrap(),
            Command::DeleteVolunteer(Index::from_zero_based(1))
        );
        let err = parse_command("delete_elderly zero").unwrap_err();
        assert!(err.to_string().contains(DELETE_ELDERLY_USAGE));
    }

    #[test]
    fn test_parse_edit_volunteer() {
        let command = parse_command("edit_volunteer 1 p/91234567 t/").unwrap();
        let Command::EditVolunteer { index, descriptor } = command else {
            panic!("expected edit_volunteer");
        };
        assert_eq!(index.one_based(), 1);
        assert_eq!(descriptor.phone, Some(Phone::parse("91234567").unwrap()));
        assert_eq!(descriptor.tags, Some(std::collections::BTreeSet::new()));
        assert!(descriptor.medical_tags.is_none());
    }

    #[test]
    fn test_parse_edit_requires_field() {
        let err = parse_command("edit_elderly 1").unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_NOT_EDITED);
    }

    #[test]
    fn test_parse_edit_requires_index() {
        let err = parse_command("edit_elderly r/LOW").unwrap_err();
        assert!(err.to_string().contains(EDIT_ELDERLY_USAGE));
    }

    #[test]
    fn test_parse_edit_elderly_risk() {
        let command = parse_command("edit_elderly 3 r/medium").unwrap();
        let Command::EditElderly { descriptor, .. } = command else {
            panic!("expected edit_elderly");
        };
        assert_eq!(descriptor.risk_level, Some(RiskLevel::Medium));
    }

    #[test]
    fn test_parse_find() {
        let command = parse_command("find n/Alice mt/CPR").unwrap();
        let expected = FindCriteria {
            name: Some(NameContainsKeywordPredicate::new("alice")),
            medical_qualification: Some(MedicalQualificationContainsKeywordPredicate::new("cpr")),
            ..FindCriteria::default()
        };
        assert_eq!(command, Command::Find(expected));
    }

    #[test]
    fn test_parse_find_requires_criteria() {
        assert!(parse_command("find").is_err());
        assert!(parse_command("find alice").is_err());
        assert!(parse_command("find n/").is_err());
    }

    #[test]
    fn test_parse_find_validates_nric() {
        let err = parse_command("find ic/123").unwrap_err();
        assert_eq!(err.to_string(), Nric::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_parse_pair() {
        let command = parse_command("pair eic/S7654321C vic/s1234567a").unwrap();
        assert_eq!(
            command,
            Command::Pair(Pair::new(
                Nric::parse("S7654321C").unwrap(),
                Nric::parse("S1234567A").unwrap()
            ))
        );
        assert!(parse_command("unpair eic/S7654321C").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("list").unwrap(), Command::List);
        assert_eq!(parse_command("  clear  ").unwrap(), Command::Clear);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_command("frobnicate n/x").unwrap_err();
        assert!(matches!(err, Error::UnknownCommand));
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_command("   ").unwrap_err();
        assert!(err.to_string().starts_with("Invalid command format!"));
    }
}
