//! `pair` and `unpair`.

use tracing::info;

use crate::error::{Error, Result};
use crate::model::{Model, Pair};

use super::CommandResult;

/// Usage of `pair`.
pub const PAIR_USAGE: &str = "pair: Pairs a volunteer with an elderly person.\n\
Parameters: eic/ELDERLY_NRIC vic/VOLUNTEER_NRIC\n\
Example: pair eic/S2027069E vic/S8959886I";

/// Usage of `unpair`.
pub const UNPAIR_USAGE: &str = "unpair: Removes the pairing between a volunteer and an \
elderly person.\n\
Parameters: eic/ELDERLY_NRIC vic/VOLUNTEER_NRIC\n\
Example: unpair eic/S2027069E vic/S8959886I";

/// Shown when the pair is already recorded.
pub const MESSAGE_DUPLICATE_PAIR: &str = "This pair already exists in the database";
/// Shown when unpairing a pair that is not recorded.
pub const MESSAGE_PAIR_NOT_FOUND: &str = "This pair does not exist in the database";

pub(super) fn pair(model: &mut Model, pair: Pair) -> Result<CommandResult> {
    let link = model.friendly_link();
    if link.elderly_by_nric(&pair.elderly_nric).is_none() {
        return Err(Error::command(format!(
            "The elderly with NRIC {} does not exist in the database",
            pair.elderly_nric
        )));
    }
    if link.volunteer_by_nric(&pair.volunteer_nric).is_none() {
        return Err(Error::command(format!(
            "The volunteer with NRIC {} does not exist in the database",
            pair.volunteer_nric
        )));
    }
    if model.has_pair(&pair) {
        return Err(Error::command(MESSAGE_DUPLICATE_PAIR));
    }

    let feedback = format!("New pair added: {pair}");
    info!(%pair, "Pair added");
    model.add_pair(pair)?;
    Ok(CommandResult::new(feedback).with_lists())
}

pub(super) fn unpair(model: &mut Model, pair: &Pair) -> Result<CommandResult> {
    if !model.has_pair(pair) {
        return Err(Error::command(MESSAGE_PAIR_NOT_FOUND));
    }
    model.delete_pair(pair)?;
    info!(%pair, "Pair removed");
    Ok(CommandResult::new(format!("Pair removed: {pair}")).with_lists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::Command;
    use crate::model::Nric;
    use crate::testutil::{alice_volunteer, bob_elderly};

    fn model() -> Model {
        let mut model = Model::default();
        model.add_volunteer(alice_volunteer()).unwrap();
        model.add_elderly(bob_elderly()).unwrap();
        model
    }

    fn bob_alice() -> Pair {
        Pair::new(bob_elderly().nric, alice_volunteer().nric)
    }

    #[test]
    fn test_pair_and_unpair() {
        let mut model = model();
        let result = Command::Pair(bob_alice()).execute(&mut model).unwrap();
        assert!(result.feedback.starts_with("New pair added"));
        assert!(model.has_pair(&bob_alice()));

        let result = Command::Unpair(bob_alice()).execute(&mut model).unwrap();
        assert!(result.feedback.starts_with("Pair removed"));
        assert!(!model.has_pair(&bob_alice()));
    }

    #[test]
    fn test_pair_duplicate() {
        let mut model = model();
        Command::Pair(bob_alice()).execute(&mut model).unwrap();
        let err = Command::Pair(bob_alice()).execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_PAIR);
    }

    #[test]
    fn test_pair_unknown_person() {
        let mut model = model();
        let pair = Pair::new(bob_elderly().nric, Nric::parse("F0000000X").unwrap());
        let err = Command::Pair(pair).execute(&mut model).unwrap_err();
        assert!(err.to_string().contains("volunteer with NRIC F0000000X"));
    }

    #[test]
    fn test_unpair_missing() {
        let mut model = model();
        let err = Command::Unpair(bob_alice()).execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_PAIR_NOT_FOUND);
    }
}
