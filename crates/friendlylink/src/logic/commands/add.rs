//! `add_volunteer` and `add_elderly`.

use tracing::info;

use crate::error::{Error, Result};
use crate::model::{Elderly, Model, Volunteer};

use super::CommandResult;

/// Usage of `add_volunteer`.
pub const ADD_VOLUNTEER_USAGE: &str = "add_volunteer: Adds a volunteer to the database. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS ic/NRIC ag/AGE [t/TAG]... [mt/MEDICAL_QUALIFICATION]...\n\
Example: add_volunteer n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
ic/S1234567A ag/20 t/new t/undergradStudent mt/CPR";

/// Usage of `add_elderly`.
pub const ADD_ELDERLY_USAGE: &str = "add_elderly: Adds an elderly person to the database. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS ic/NRIC ag/AGE r/RISK_LEVEL [t/TAG]...\n\
Example: add_elderly n/Tan Ah Kow p/91234567 e/tanak@example.com a/Blk 123 Bedok North, #05-12 \
ic/S1234567B ag/79 r/HIGH t/diabetic";

const MESSAGE_VOLUNTEER_SUCCESS: &str = "New volunteer added: ";
const MESSAGE_ELDERLY_SUCCESS: &str = "New elderly added: ";

/// Shown when adding a volunteer identical to an existing one.
pub const MESSAGE_DUPLICATE_VOLUNTEER: &str = "This volunteer already exists in the database";
/// Shown when adding an elderly record identical to an existing one.
pub const MESSAGE_DUPLICATE_ELDERLY: &str = "This elderly already exists in the database";

pub(super) fn add_volunteer(model: &mut Model, volunteer: Volunteer) -> Result<CommandResult> {
    if model.has_volunteer(&volunteer) {
        return Err(Error::command(MESSAGE_DUPLICATE_VOLUNTEER));
    }
    let feedback = format!("{MESSAGE_VOLUNTEER_SUCCESS}{volunteer}");
    info!(nric = %volunteer.nric, "Volunteer added");
    model.add_volunteer(volunteer)?;
    Ok(CommandResult::new(feedback).with_lists())
}

pub(super) fn add_elderly(model: &mut Model, elderly: Elderly) -> Result<CommandResult> {
    if model.has_elderly(&elderly) {
        return Err(Error::command(MESSAGE_DUPLICATE_ELDERLY));
    }
    let feedback = format!("{MESSAGE_ELDERLY_SUCCESS}{elderly}");
    info!(nric = %elderly.nric, "Elderly added");
    model.add_elderly(elderly)?;
    Ok(CommandResult::new(feedback).with_lists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::Command;
    use crate::testutil::{alice_volunteer, bob_elderly};

    #[test]
    fn test_add_volunteer_success() {
        let mut model = Model::default();
        let result = Command::AddVolunteer(alice_volunteer())
            .execute(&mut model)
            .unwrap();

        assert_eq!(
            result.feedback,
            format!("New volunteer added: {}", alice_volunteer())
        );
        assert!(model.has_volunteer(&alice_volunteer()));
    }

    #[test]
    fn test_add_duplicate_volunteer_rejected() {
        let mut model = Model::default();
        model.add_volunteer(alice_volunteer()).unwrap();

        let err = Command::AddVolunteer(alice_volunteer())
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_VOLUNTEER);
        assert_eq!(model.friendly_link().volunteers().len(), 1);
    }

    #[test]
    fn test_add_elderly_success_and_duplicate() {
        let mut model = Model::default();
        Command::AddElderly(bob_elderly())
            .execute(&mut model)
            .unwrap();
        let err = Command::AddElderly(bob_elderly())
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_ELDERLY);
    }
}
