//! `edit_volunteer` and `edit_elderly`.

use std::collections::BTreeSet;

use tracing::info;

use crate::error::{Error, Result};
use crate::logic::Index;
use crate::model::{
    Address, Age, Elderly, Email, Model, Name, Nric, Phone, RiskLevel, Tag, Volunteer,
};

use super::add::{MESSAGE_DUPLICATE_ELDERLY, MESSAGE_DUPLICATE_VOLUNTEER};
use super::{CommandResult, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX};

/// Usage of `edit_volunteer`.
pub const EDIT_VOLUNTEER_USAGE: &str = "edit_volunteer: Edits the details of the volunteer \
identified by the index number used in the displayed volunteer list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
[ic/NRIC] [ag/AGE] [t/TAG]... [mt/MEDICAL_QUALIFICATION]...\n\
Example: edit_volunteer 1 p/91234567 e/johndoe@example.com";

/// Usage of `edit_elderly`.
pub const EDIT_ELDERLY_USAGE: &str = "edit_elderly: Edits the details of the elderly \
identified by the index number used in the displayed elderly list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
[ic/NRIC] [ag/AGE] [r/RISK_LEVEL] [t/TAG]...\n\
Example: edit_elderly 1 r/HIGH";

/// Shown when an edit names no fields.
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Replacement values for a volunteer's fields; `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditVolunteerDescriptor {
    /// New name.
    pub name: Option<Name>,
    /// New phone number.
    pub phone: Option<Phone>,
    /// New email address.
    pub email: Option<Email>,
    /// New address.
    pub address: Option<Address>,
    /// New NRIC.
    pub nric: Option<Nric>,
    /// New age.
    pub age: Option<Age>,
    /// Replacement tag set.
    pub tags: Option<BTreeSet<Tag>>,
    /// Replacement medical qualification set.
    pub medical_tags: Option<BTreeSet<Tag>>,
}

impl EditVolunteerDescriptor {
    /// Check if any field is set.
    #[must_use]
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.nric.is_some()
            || self.age.is_some()
            || self.tags.is_some()
            || self.medical_tags.is_some()
    }

    /// Produce the edited copy of `volunteer`.
    #[must_use]
    pub fn apply(&self, volunteer: &Volunteer) -> Volunteer {
        Volunteer {
            name: self.name.clone().unwrap_or_else(|| volunteer.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| volunteer.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| volunteer.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| volunteer.address.clone()),
            nric: self.nric.clone().unwrap_or_else(|| volunteer.nric.clone()),
            age: self.age.unwrap_or(volunteer.age),
            tags: self.tags.clone().unwrap_or_else(|| volunteer.tags.clone()),
            medical_tags: self
                .medical_tags
                .clone()
                .unwrap_or_else(|| volunteer.medical_tags.clone()),
        }
    }
}

/// Replacement values for an elderly person's fields; `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditElderlyDescriptor {
    /// New name.
    pub name: Option<Name>,
    /// New phone number.
    pub phone: Option<Phone>,
    /// New email address.
    pub email: Option<Email>,
    /// New address.
    pub address: Option<Address>,
    /// New NRIC.
    pub nric: Option<Nric>,
    /// New age.
    pub age: Option<Age>,
    /// New risk level.
    pub risk_level: Option<RiskLevel>,
    /// Replacement tag set.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditElderlyDescriptor {
    /// Check if any field is set.
    #[must_use]
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.nric.is_some()
            || self.age.is_some()
            || self.risk_level.is_some()
            || self.tags.is_some()
    }

    /// Produce the edited copy of `elderly`.
    #[must_use]
    pub fn apply(&self, elderly: &Elderly) -> Elderly {
        Elderly {
            name: self.name.clone().unwrap_or_else(|| elderly.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| elderly.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| elderly.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| elderly.address.clone()),
            nric: self.nric.clone().unwrap_or_else(|| elderly.nric.clone()),
            age: self.age.unwrap_or(elderly.age),
            risk_level: self.risk_level.unwrap_or(elderly.risk_level),
            tags: self.tags.clone().unwrap_or_else(|| elderly.tags.clone()),
        }
    }
}

pub(super) fn edit_volunteer(
    model: &mut Model,
    index: Index,
    descriptor: &EditVolunteerDescriptor,
) -> Result<CommandResult> {
    let target = model
        .filtered_volunteers()
        .get(index.zero_based())
        .map(|v| (*v).clone())
        .ok_or_else(|| Error::command(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))?;

    let edited = descriptor.apply(&target);
    if edited != target && model.has_volunteer(&edited) {
        return Err(Error::command(MESSAGE_DUPLICATE_VOLUNTEER));
    }

    model.set_volunteer(&target, edited.clone())?;
    info!(nric = %edited.nric, "Volunteer edited");
    Ok(CommandResult::new(format!("Edited volunteer: {edited}")).with_lists())
}

pub(super) fn edit_elderly(
    model: &mut Model,
    index: Index,
    descriptor: &EditElderlyDescriptor,
) -> Result<CommandResult> {
    let target = model
        .filtered_elderly()
        .get(index.zero_based())
        .map(|e| (*e).clone())
        .ok_or_else(|| Error::command(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))?;

    let edited = descriptor.apply(&target);
    if edited != target && model.has_elderly(&edited) {
        return Err(Error::command(MESSAGE_DUPLICATE_ELDERLY));
    }

    model.set_elderly(&target, edited.clone())?;
    info!(nric = %edited.nric, "Elderly edited");
    Ok(CommandResult::new(format!("Edited elderly: {edited}")).with_lists())
}
