//! Sample records used to populate a fresh installation.

use std::collections::BTreeSet;

use crate::error::Result;

use super::friendly_link::FriendlyLink;
use super::information::{Address, Age, Email, Name, Nric, Phone, RiskLevel, Tag};
use super::pair::Pair;
use super::person::{Elderly, Volunteer};

fn tag_set(names: &[&str]) -> Result<BTreeSet<Tag>> {
    names.iter().map(|name| Tag::parse(name)).collect()
}

fn sample_volunteers() -> Result<Vec<Volunteer>> {
    Ok(vec![
        Volunteer {
            name: Name::parse("Alex Yeoh")?,
            phone: Phone::parse("87438807")?,
            email: Email::parse("alexyeoh@example.com")?,
            address: Address::parse("Blk 30 Geylang Street 29, #06-40")?,
            nric: Nric::parse("S8457677H")?,
            age: Age::parse("21")?,
            tags: tag_set(&["student"])?,
            medical_tags: tag_set(&["CPR"])?,
        },
        Volunteer {
            name: Name::parse("Bernice Yu")?,
            phone: Phone::parse("99272758")?,
            email: Email::parse("berniceyu@example.com")?,
            address: Address::parse("Blk 30 Lorong 3 Serangoon Gardens, #07-18")?,
            nric: Nric::parse("S8959886I")?,
            age: Age::parse("34")?,
            tags: tag_set(&["nurse"])?,
            medical_tags: tag_set(&["BCLS", "FirstAid"])?,
        },
        Volunteer {
            name: Name::parse("Charlotte Oliveiro")?,
            phone: Phone::parse("93210283")?,
            email: Email::parse("charlotte@example.com")?,
            address: Address::parse("Blk 11 Ang Mo Kio Street 74, #11-04")?,
            nric: Nric::parse("T0139571B")?,
            age: Age::parse("19")?,
            tags: BTreeSet::new(),
            medical_tags: BTreeSet::new(),
        },
    ])
}

fn sample_elderly() -> Result<Vec<Elderly>> {
    Ok(vec![
        Elderly {
            name: Name::parse("David Li")?,
            phone: Phone::parse("91031282")?,
            email: Email::parse("lidavid@example.com")?,
            address: Address::parse("Blk 436 Serangoon Gardens Street 26, #16-43")?,
            nric: Nric::parse("S5243820H")?,
            age: Age::parse("74")?,
            risk_level: RiskLevel::Low,
            tags: tag_set(&["neighbours"])?,
        },
        Elderly {
            name: Name::parse("Irfan Ibrahim")?,
            phone: Phone::parse("92492021")?,
            email: Email::parse("irfan@example.com")?,
            address: Address::parse("Blk 47 Tampines Street 20, #17-35")?,
            nric: Nric::parse("S2027069E")?,
            age: Age::parse("83")?,
            risk_level: RiskLevel::High,
            tags: tag_set(&["wheelchair"])?,
        },
        Elderly {
            name: Name::parse("Roy Balakrishnan")?,
            phone: Phone::parse("92624417")?,
            email: Email::parse("royb@example.com")?,
            address: Address::parse("Blk 45 Aljunied Street 85, #11-31")?,
            nric: Nric::parse("S3841738G")?,
            age: Age::parse("68")?,
            risk_level: RiskLevel::Medium,
            tags: BTreeSet::new(),
        },
    ])
}

/// Build the sample database: three volunteers, three elderly, one pair.
///
/// # Errors
///
/// Returns an error only if the built-in sample values fail validation.
pub fn sample_friendly_link() -> Result<FriendlyLink> {
    let pairs = vec![Pair::new(Nric::parse("S2027069E")?, Nric::parse("S8959886I")?)];
    FriendlyLink::from_parts(sample_volunteers()?, sample_elderly()?, pairs)
}
