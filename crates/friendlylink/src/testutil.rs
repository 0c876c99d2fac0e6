//! Shared fixtures for unit tests.

use std::collections::BTreeSet;

use crate::model::{Address, Age, Elderly, Email, Name, Nric, Phone, RiskLevel, Tag, Volunteer};

fn tags(names: &[&str]) -> BTreeSet<Tag> {
    names.iter().map(|t| Tag::parse(t).unwrap()).collect()
}

pub fn volunteer(name: &str, nric: &str) -> Volunteer {
    Volunteer {
        name: Name::parse(name).unwrap(),
        phone: Phone::parse("94351253").unwrap(),
        email: Email::parse("volunteer@example.com").unwrap(),
        address: Address::parse("123, Jurong West Ave 6, #08-111").unwrap(),
        nric: Nric::parse(nric).unwrap(),
        age: Age::parse("25").unwrap(),
        tags: BTreeSet::new(),
        medical_tags: BTreeSet::new(),
    }
}

pub fn elderly(name: &str, nric: &str) -> Elderly {
    Elderly {
        name: Name::parse(name).unwrap(),
        phone: Phone::parse("98765432").unwrap(),
        email: Email::parse("elderly@example.com").unwrap(),
        address: Address::parse("311, Clementi Ave 2, #02-25").unwrap(),
        nric: Nric::parse(nric).unwrap(),
        age: Age::parse("80").unwrap(),
        risk_level: RiskLevel::Low,
        tags: BTreeSet::new(),
    }
}

pub fn alice_volunteer() -> Volunteer {
    Volunteer {
        tags: tags(&["friends"]),
        medical_tags: tags(&["CPR"]),
        ..volunteer("Alice Pauline", "S1234567A")
    }
}

pub fn benson_volunteer() -> Volunteer {
    Volunteer {
        tags: tags(&["owesMoney", "friends"]),
        medical_tags: tags(&["FirstAid", "BCLS"]),
        age: Age::parse("31").unwrap(),
        ..volunteer("Benson Meier", "T0123456B")
    }
}

pub fn bob_elderly() -> Elderly {
    Elderly {
        risk_level: RiskLevel::High,
        age: Age::parse("88").unwrap(),
        ..elderly("Bob Choo", "S7654321C")
    }
}

pub fn carl_elderly() -> Elderly {
    Elderly {
        tags: tags(&["diabetic"]),
        risk_level: RiskLevel::Medium,
        ..elderly("Carl Kurz", "G1111111D")
    }
}
