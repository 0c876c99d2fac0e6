//! Whole-file JSON documents.
//!
//! Each data file holds one top-level object wrapping a list of adapted
//! records, e.g. `{"volunteers": [...]}`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Elderly, FriendlyLink, Pair, Volunteer};

use super::adapted::{JsonAdaptedElderly, JsonAdaptedPair, JsonAdaptedVolunteer};

/// Contents of the volunteers file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableVolunteers {
    /// Stored volunteers.
    #[serde(default)]
    pub volunteers: Vec<JsonAdaptedVolunteer>,
}

/// Contents of the elderly file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableElderly {
    /// Stored elderly.
    #[serde(default)]
    pub elderly: Vec<JsonAdaptedElderly>,
}

/// Contents of the pairs file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializablePairs {
    /// Stored pairs.
    #[serde(default)]
    pub pairs: Vec<JsonAdaptedPair>,
}

impl From<&FriendlyLink> for JsonSerializableVolunteers {
    fn from(link: &FriendlyLink) -> Self {
        Self {
            volunteers: link.volunteers().iter().map(Into::into).collect(),
        }
    }
}

impl From<&FriendlyLink> for JsonSerializableElderly {
    fn from(link: &FriendlyLink) -> Self {
        Self {
            elderly: link.elderly().iter().map(Into::into).collect(),
        }
    }
}

impl From<&FriendlyLink> for JsonSerializablePairs {
    fn from(link: &FriendlyLink) -> Self {
        Self {
            pairs: link.pairs().iter().map(Into::into).collect(),
        }
    }
}

impl JsonSerializableVolunteers {
    /// Convert every stored volunteer.
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered.
    pub fn to_model_type(&self) -> Result<Vec<Volunteer>> {
        self.volunteers
            .iter()
            .map(JsonAdaptedVolunteer::to_model_type)
            .collect()
    }
}

impl JsonSerializableElderly {
    /// Convert every stored elderly person.
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered.
    pub fn to_model_type(&self) -> Result<Vec<Elderly>> {
        self.elderly
            .iter()
            .map(JsonAdaptedElderly::to_model_type)
            .collect()
    }
}

impl JsonSerializablePairs {
    /// Convert every stored pair.
    ///
    /// # Errors
    ///
    /// Returns the first field error encountered.
    pub fn to_model_type(&self) -> Result<Vec<Pair>> {
        self.pairs.iter().map(JsonAdaptedPair::to_model_type).collect()
    }
}
