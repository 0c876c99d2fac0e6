//! JSON-friendly mirrors of the model records.
//!
//! Every field is kept as raw text so that a hand-edited file can be loaded
//! and checked field by field, reporting the first problem found.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{
    Address, Age, Elderly, Email, Name, Nric, Pair, Phone, RiskLevel, Tag, Volunteer,
};

const VOLUNTEER: &str = "Volunteer";
const ELDERLY: &str = "Elderly";
const PAIR: &str = "Pair";

/// Parse a required field, reporting `kind` and `field` if it is absent.
fn required<T>(
    raw: Option<&str>,
    kind: &'static str,
    field: &'static str,
    parse: impl FnOnce(&str) -> Result<T>,
) -> Result<T> {
    raw.map_or_else(|| Err(Error::missing_field(kind, field)), parse)
}

fn tags_to_model(raw: &[String]) -> Result<std::collections::BTreeSet<Tag>> {
    raw.iter().map(|t| Tag::parse(t)).collect()
}

fn tags_from_model<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> Vec<String> {
    tags.into_iter().map(ToString::to_string).collect()
}

/// A volunteer as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedVolunteer {
    /// Raw name.
    pub name: Option<String>,
    /// Raw phone number.
    pub phone: Option<String>,
    /// Raw email address.
    pub email: Option<String>,
    /// Raw address.
    pub address: Option<String>,
    /// Raw NRIC.
    pub nric: Option<String>,
    /// Raw age.
    pub age: Option<String>,
    /// Raw tag names.
    #[serde(default)]
    pub tagged: Vec<String>,
    /// Raw medical qualification names.
    #[serde(default)]
    pub medical_tags: Vec<String>,
}

impl From<&Volunteer> for JsonAdaptedVolunteer {
    fn from(volunteer: &Volunteer) -> Self {
        Self {
            name: Some(volunteer.name.to_string()),
            phone: Some(volunteer.phone.to_string()),
            email: Some(volunteer.email.to_string()),
            address: Some(volunteer.address.to_string()),
            nric: Some(volunteer.nric.to_string()),
            age: Some(volunteer.age.to_string()),
            tagged: tags_from_model(&volunteer.tags),
            medical_tags: tags_from_model(&volunteer.medical_tags),
        }
    }
}

impl JsonAdaptedVolunteer {
    /// Convert into a validated [`Volunteer`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for an absent field, or the field's
    /// constraint message for an invalid one.
    pub fn to_model_type(&self) -> Result<Volunteer> {
        Ok(Volunteer {
            name: required(self.name.as_deref(), VOLUNTEER, "Name", Name::parse)?,
            phone: required(self.phone.as_deref(), VOLUNTEER, "Phone", Phone::parse)?,
            email: required(self.email.as_deref(), VOLUNTEER, "Email", Email::parse)?,
            address: required(self.address.as_deref(), VOLUNTEER, "Address", Address::parse)?,
            nric: required(self.nric.as_deref(), VOLUNTEER, "Nric", Nric::parse)?,
            age: required(self.age.as_deref(), VOLUNTEER, "Age", Age::parse)?,
            tags: tags_to_model(&self.tagged)?,
            medical_tags: tags_to_model(&self.medical_tags)?,
        })
    }
}

/// An elderly person as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedElderly {
    /// Raw name.
    pub name: Option<String>,
    /// Raw phone number.
    pub phone: Option<String>,
    /// Raw email address.
    pub email: Option<String>,
    /// Raw address.
    pub address: Option<String>,
    /// Raw NRIC.
    pub nric: Option<String>,
    /// Raw age.
    pub age: Option<String>,
    /// Raw risk level label.
    pub risk_level: Option<String>,
    /// Raw tag names.
    #[serde(default)]
    pub tagged: Vec<String>,
}

impl From<&Elderly> for JsonAdaptedElderly {
    fn from(elderly: &Elderly) -> Self {
        Self {
            name: Some(elderly.name.to_string()),
            phone: Some(elderly.phone.to_string()),
            email: Some(elderly.email.to_string()),
            address: Some(elderly.address.to_string()),
            nric: Some(elderly.nric.to_string()),
            age: Some(elderly.age.to_string()),
            risk_level: Some(elderly.risk_level.to_string()),
            tagged: tags_from_model(&elderly.tags),
        }
    }
}

impl JsonAdaptedElderly {
    /// Convert into a validated [`Elderly`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for an absent field, or the field's
    /// constraint message for an invalid one.
    pub fn to_model_type(&self) -> Result<Elderly> {
        Ok(Elderly {
            name: required(self.name.as_deref(), ELDERLY, "Name", Name::parse)?,
            phone: required(self.phone.as_deref(), ELDERLY, "Phone", Phone::parse)?,
            email: required(self.email.as_deref(), ELDERLY, "Email", Email::parse)?,
            address: required(self.address.as_deref(), ELDERLY, "Address", Address::parse)?,
            nric: required(self.nric.as_deref(), ELDERLY, "Nric", Nric::parse)?,
            age: required(self.age.as_deref(), ELDERLY, "Age", Age::parse)?,
            risk_level: required(
                self.risk_level.as_deref(),
                ELDERLY,
                "RiskLevel",
                RiskLevel::parse,
            )?,
            tags: tags_to_model(&self.tagged)?,
        })
    }
}

/// A pair as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPair {
    /// Raw NRIC of the elderly person.
    pub elderly_nric: Option<String>,
    /// Raw NRIC of the volunteer.
    pub volunteer_nric: Option<String>,
}

impl From<&Pair> for JsonAdaptedPair {
    fn from(pair: &Pair) -> Self {
        Self {
            elderly_nric: Some(pair.elderly_nric.to_string()),
            volunteer_nric: Some(pair.volunteer_nric.to_string()),
        }
    }
}

impl JsonAdaptedPair {
    /// Convert into a [`Pair`]. Whether the NRICs name known persons is
    /// checked when the whole database is assembled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for an absent NRIC, or the NRIC
    /// constraint message for an invalid one.
    pub fn to_model_type(&self) -> Result<Pair> {
        Ok(Pair::new(
            required(self.elderly_nric.as_deref(), PAIR, "ElderlyNric", Nric::parse)?,
            required(self.volunteer_nric.as_deref(), PAIR, "VolunteerNric", Nric::parse)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{benson_volunteer, bob_elderly, carl_elderly};

    #[test]
    fn test_valid_volunteer_converts_back() {
        let adapted = JsonAdaptedVolunteer::from(&benson_volunteer());
        assert_eq!(adapted.to_model_type().unwrap(), benson_volunteer());
    }

    #[test]
    fn test_volunteer_missing_name() {
        let adapted = JsonAdaptedVolunteer {
            name: None,
            ..JsonAdaptedVolunteer::from(&benson_volunteer())
        };
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err.to_string(), "Volunteer's Name field is missing!");
    }

    #[test]
    fn test_volunteer_invalid_email() {
        let adapted = JsonAdaptedVolunteer {
            email: Some("example.com".to_string()),
            ..JsonAdaptedVolunteer::from(&benson_volunteer())
        };
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err.to_string(), Email::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_volunteer_invalid_medical_tag() {
        let mut adapted = JsonAdaptedVolunteer::from(&benson_volunteer());
        adapted.medical_tags.push("#first aid".to_string());
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err.to_string(), Tag::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_valid_elderly_converts_back() {
        let adapted = JsonAdaptedElderly::from(&carl_elderly());
        assert_eq!(adapted.to_model_type().unwrap(), carl_elderly());
    }

    #[test]
    fn test_elderly_missing_risk_level() {
        let adapted = JsonAdaptedElderly {
            risk_level: None,
            ..JsonAdaptedElderly::from(&bob_elderly())
        };
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err.to_string(), "Elderly's RiskLevel field is missing!");
    }

    #[test]
    fn test_elderly_invalid_risk_level() {
        let adapted = JsonAdaptedElderly {
            risk_level: Some("SEVERE".to_string()),
            ..JsonAdaptedElderly::from(&bob_elderly())
        };
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err.to_string(), RiskLevel::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_elderly_invalid_age() {
        let adapted = JsonAdaptedElderly {
            age: Some("151".to_string()),
            ..JsonAdaptedElderly::from(&bob_elderly())
        };
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err.to_string(), Age::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = serde_json::to_value(JsonAdaptedElderly::from(&carl_elderly())).unwrap();
        assert_eq!(json["riskLevel"], "MEDIUM");
        assert_eq!(json["age"], "80");
        assert_eq!(json["tagged"][0], "diabetic");
    }

    #[test]
    fn test_missing_tag_arrays_default_to_empty() {
        let json = r#"{"name":"Ann","phone":"123","email":"a@bc","address":"x",
            "nric":"S1111111A","age":"30"}"#;
        let adapted: JsonAdaptedVolunteer = serde_json::from_str(json).unwrap();
        let volunteer = adapted.to_model_type().unwrap();
        assert!(volunteer.tags.is_empty());
        assert!(volunteer.medical_tags.is_empty());
    }

    #[test]
    fn test_pair_missing_volunteer_nric() {
        let adapted = JsonAdaptedPair {
            elderly_nric: Some("S1234567A".to_string()),
            volunteer_nric: None,
        };
        let err = adapted.to_model_type().unwrap_err();
        assert_eq!(err.to_string(), "Pair's VolunteerNric field is missing!");
    }
}
