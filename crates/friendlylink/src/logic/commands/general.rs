//! `list`, `clear`, `help` and `exit`.

use crate::model::{FriendlyLink, Model};

use super::CommandResult;

/// Summary of every command, shown by `help`.
pub const HELP_MESSAGE: &str = "\
Commands:
  add_volunteer n/NAME p/PHONE e/EMAIL a/ADDRESS ic/NRIC ag/AGE [t/TAG]... [mt/MEDICAL_QUALIFICATION]...
  add_elderly n/NAME p/PHONE e/EMAIL a/ADDRESS ic/NRIC ag/AGE r/RISK_LEVEL [t/TAG]...
  edit_volunteer INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [ic/NRIC] [ag/AGE] [t/TAG]... [mt/MEDICAL_QUALIFICATION]...
  edit_elderly INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [ic/NRIC] [ag/AGE] [r/RISK_LEVEL] [t/TAG]...
  delete_volunteer INDEX
  delete_elderly INDEX
  find [n/NAME] [ic/NRIC] [ag/AGE] [r/RISK_LEVEL] [t/TAG] [mt/MEDICAL_QUALIFICATION]
  pair eic/ELDERLY_NRIC vic/VOLUNTEER_NRIC
  unpair eic/ELDERLY_NRIC vic/VOLUNTEER_NRIC
  list
  clear
  help
  exit";

pub(super) fn list(model: &mut Model) -> CommandResult {
    model.show_all();
    CommandResult::new("Listed all volunteers and elderly").with_lists()
}

pub(super) fn clear(model: &mut Model) -> CommandResult {
    model.set_friendly_link(FriendlyLink::new());
    CommandResult::new("FriendlyLink has been cleared!").with_lists()
}

pub(super) fn help() -> CommandResult {
    CommandResult {
        show_help: true,
        ..CommandResult::new(HELP_MESSAGE)
    }
}

pub(super) fn exit() -> CommandResult {
    CommandResult {
        exit: true,
        ..CommandResult::new("Exiting FriendlyLink as requested ...")
    }
}
