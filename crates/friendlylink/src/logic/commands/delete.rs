//! `delete_volunteer` and `delete_elderly`.

use tracing::info;

use crate::error::{Error, Result};
use crate::logic::Index;
use crate::model::Model;

use super::{CommandResult, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX};

/// Usage of `delete_volunteer`.
pub const DELETE_VOLUNTEER_USAGE: &str = "delete_volunteer: Deletes the volunteer identified \
by the index number used in the displayed volunteer list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete_volunteer 1";

/// Usage of `delete_elderly`.
pub const DELETE_ELDERLY_USAGE: &str = "delete_elderly: Deletes the elderly identified \
by the index number used in the displayed elderly list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete_elderly 1";

pub(super) fn delete_volunteer(model: &mut Model, index: Index) -> Result<CommandResult> {
    let target = model
        .filtered_volunteers()
        .get(index.zero_based())
        .map(|v| (*v).clone())
        .ok_or_else(|| Error::command(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))?;

    let removed = model.delete_volunteer(&target)?;
    info!(nric = %removed.nric, "Volunteer deleted");
    Ok(CommandResult::new(format!("Deleted volunteer: {removed}")).with_lists())
}

pub(super) fn delete_elderly(model: &mut Model, index: Index) -> Result<CommandResult> {
    let target = model
        .filtered_elderly()
        .get(index.zero_based())
        .map(|e| (*e).clone())
        .ok_or_else(|| Error::command(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX))?;

    let removed = model.delete_elderly(&target)?;
    info!(nric = %removed.nric, "Elderly deleted");
    Ok(CommandResult::new(format!("Deleted elderly: {removed}")).with_lists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::Command;
    use crate::model::predicates::NameContainsKeywordPredicate;
    use crate::model::Pair;
    use crate::testutil::{alice_volunteer, benson_volunteer, bob_elderly};

    fn model() -> Model {
        let mut model = Model::default();
        model.add_volunteer(alice_volunteer()).unwrap();
        model.add_volunteer(benson_volunteer()).unwrap();
        model.add_elderly(bob_elderly()).unwrap();
        model
    }

    #[test]
    fn test_delete_volunteer_by_index() {
        let mut model = model();
        let result = Command::DeleteVolunteer(Index::from_zero_based(1))
            .execute(&mut model)
            .unwrap();
        assert!(result.feedback.starts_with("Deleted volunteer: Benson Meier"));
        assert!(!model.has_volunteer(&benson_volunteer()));
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut model = model();
        let err = Command::DeleteElderly(Index::from_zero_based(1))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
    }

    #[test]
    fn test_delete_uses_filtered_list() {
        let mut model = model();
        model.update_volunteer_filter(Box::new(NameContainsKeywordPredicate::new("benson")));

        Command::DeleteVolunteer(Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();
        assert!(model.has_volunteer(&alice_volunteer()));
        assert!(!model.has_volunteer(&benson_volunteer()));
    }

    #[test]
    fn test_delete_elderly_removes_pairs() {
        let mut model = model();
        let pair = Pair::new(bob_elderly().nric, alice_volunteer().nric);
        model.add_pair(pair.clone()).unwrap();

        Command::DeleteElderly(Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();
        assert!(!model.has_pair(&pair));
    }
}
