//! Volunteer and elderly records.

use std::collections::BTreeSet;
use std::fmt;

use super::information::{Address, Age, Email, Name, Nric, Phone, RiskLevel, Tag};

/// Fields shared by every kind of person record.
pub trait Person {
    /// Human-readable kind, used in messages (`volunteer`, `elderly`).
    const KIND: &'static str;

    /// The person's name.
    fn name(&self) -> &Name;
    /// The person's phone number.
    fn phone(&self) -> &Phone;
    /// The person's email address.
    fn email(&self) -> &Email;
    /// The person's address.
    fn address(&self) -> &Address;
    /// The person's NRIC.
    fn nric(&self) -> &Nric;
    /// The person's age.
    fn age(&self) -> Age;
    /// Free-form tags.
    fn tags(&self) -> &BTreeSet<Tag>;
}

/// Writes the fields common to every person in display form.
fn fmt_common<P: Person>(person: &P, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "{}; Phone: {}; Email: {}; Address: {}; NRIC: {}; Age: {}",
        person.name(),
        person.phone(),
        person.email(),
        person.address(),
        person.nric(),
        person.age()
    )?;
    fmt_tags(f, "Tags", person.tags())
}

fn fmt_tags(f: &mut fmt::Formatter<'_>, label: &str, tags: &BTreeSet<Tag>) -> fmt::Result {
    if tags.is_empty() {
        return Ok(());
    }
    write!(f, "; {label}: ")?;
    for tag in tags {
        write!(f, "[{tag}]")?;
    }
    Ok(())
}

/// A volunteer who can be paired with elderly people.
///
/// Two volunteers are the same record only when every field matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Volunteer {
    /// Name.
    pub name: Name,
    /// Phone number.
    pub phone: Phone,
    /// Email address.
    pub email: Email,
    /// Address.
    pub address: Address,
    /// NRIC.
    pub nric: Nric,
    /// Age.
    pub age: Age,
    /// Free-form tags.
    pub tags: BTreeSet<Tag>,
    /// Medical qualifications held by the volunteer.
    pub medical_tags: BTreeSet<Tag>,
}

impl Volunteer {
    /// Medical qualifications held by the volunteer.
    #[must_use]
    pub fn medical_tags(&self) -> &BTreeSet<Tag> {
        &self.medical_tags
    }
}

impl Person for Volunteer {
    const KIND: &'static str = "volunteer";

    fn name(&self) -> &Name {
        &self.name
    }

    fn phone(&self) -> &Phone {
        &self.phone
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn nric(&self) -> &Nric {
        &self.nric
    }

    fn age(&self) -> Age {
        self.age
    }

    fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl fmt::Display for Volunteer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_common(self, f)?;
        fmt_tags(f, "Medical qualifications", &self.medical_tags)
    }
}

/// An elderly person who may be visited by volunteers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Elderly {
    /// Name.
    pub name: Name,
    /// Phone number.
    pub phone: Phone,
    /// Email address.
    pub email: Email,
    /// Address.
    pub address: Address,
    /// NRIC.
    pub nric: Nric,
    /// Age.
    pub age: Age,
    /// Risk level.
    pub risk_level: RiskLevel,
    /// Free-form tags.
    pub tags: BTreeSet<Tag>,
}

impl Elderly {
    /// The elderly person's risk level.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}

impl Person for Elderly {
    const KIND: &'static str = "elderly";

    fn name(&self) -> &Name {
        &self.name
    }

    fn phone(&self) -> &Phone {
        &self.phone
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn nric(&self) -> &Nric {
        &self.nric
    }

    fn age(&self) -> Age {
        self.age
    }

    fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl fmt::Display for Elderly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; NRIC: {}; Age: {}; Risk level: {}",
            self.name, self.phone, self.email, self.address, self.nric, self.age, self.risk_level
        )?;
        fmt_tags(f, "Tags", &self.tags)
    }
}
