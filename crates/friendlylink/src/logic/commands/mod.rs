//! Executable commands.
//!
//! Each variant of [`Command`] carries already-validated arguments. Execution
//! either mutates the [`Model`] and returns feedback for the user, or fails
//! with a user-facing [`Error::Command`](crate::Error::Command).

mod add;
mod delete;
mod edit;
mod find;
mod general;
mod pair;

use crate::error::Result;
use crate::logic::Index;
use crate::model::{Elderly, Model, Pair, Volunteer};

pub use add::{ADD_ELDERLY_USAGE, ADD_VOLUNTEER_USAGE};
pub use delete::{DELETE_ELDERLY_USAGE, DELETE_VOLUNTEER_USAGE};
pub use edit::{
    EditElderlyDescriptor, EditVolunteerDescriptor, EDIT_ELDERLY_USAGE, EDIT_VOLUNTEER_USAGE,
    MESSAGE_NOT_EDITED,
};
pub use find::{FindCriteria, FIND_USAGE};
pub use general::HELP_MESSAGE;
pub use pair::{PAIR_USAGE, UNPAIR_USAGE};

/// Shown when an index is past the end of the displayed list.
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";

/// Command words, as typed by the user.
pub mod words {
    /// Add a volunteer.
    pub const ADD_VOLUNTEER: &str = "add_volunteer";
    /// Add an elderly person.
    pub const ADD_ELDERLY: &str = "add_elderly";
    /// Delete a volunteer by index.
    pub const DELETE_VOLUNTEER: &str = "delete_volunteer";
    /// Delete an elderly person by index.
    pub const DELETE_ELDERLY: &str = "delete_elderly";
    /// Edit a volunteer by index.
    pub const EDIT_VOLUNTEER: &str = "edit_volunteer";
    /// Edit an elderly person by index.
    pub const EDIT_ELDERLY: &str = "edit_elderly";
    /// Filter both lists.
    pub const FIND: &str = "find";
    /// Clear filters.
    pub const LIST: &str = "list";
    /// Pair a volunteer with an elderly person.
    pub const PAIR: &str = "pair";
    /// Remove a pair.
    pub const UNPAIR: &str = "unpair";
    /// Remove every record.
    pub const CLEAR: &str = "clear";
    /// Show usage.
    pub const HELP: &str = "help";
    /// Leave the application.
    pub const EXIT: &str = "exit";
}

/// A parsed command ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a volunteer.
    AddVolunteer(Volunteer),
    /// Add an elderly person.
    AddElderly(Elderly),
    /// Delete the volunteer at this displayed position.
    DeleteVolunteer(Index),
    /// Delete the elderly person at this displayed position.
    DeleteElderly(Index),
    /// Edit the volunteer at this displayed position.
    EditVolunteer {
        /// Displayed position.
        index: Index,
        /// Fields to change.
        descriptor: EditVolunteerDescriptor,
    },
    /// Edit the elderly person at this displayed position.
    EditElderly {
        /// Displayed position.
        index: Index,
        /// Fields to change.
        descriptor: EditElderlyDescriptor,
    },
    /// Filter both lists.
    Find(FindCriteria),
    /// Clear filters.
    List,
    /// Pair a volunteer with an elderly person.
    Pair(Pair),
    /// Remove a pair.
    Unpair(Pair),
    /// Remove every record.
    Clear,
    /// Show usage.
    Help,
    /// Leave the application.
    Exit,
}

impl Command {
    /// Check if running this command changes stored data.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Find(_) | Self::List | Self::Help | Self::Exit)
    }

    /// Run the command against `model`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`](crate::Error::Command) with a user-facing
    /// message when the command cannot be applied.
    pub fn execute(self, model: &mut Model) -> Result<CommandResult> {
        match self {
            Self::AddVolunteer(volunteer) => add::add_volunteer(model, volunteer),
            Self::AddElderly(elderly) => add::add_elderly(model, elderly),
            Self::DeleteVolunteer(index) => delete::delete_volunteer(model, index),
            Self::DeleteElderly(index) => delete::delete_elderly(model, index),
            Self::EditVolunteer { index, descriptor } => {
                edit::edit_volunteer(model, index, &descriptor)
            }
            Self::EditElderly { index, descriptor } => {
                edit::edit_elderly(model, index, &descriptor)
            }
            Self::Find(criteria) => Ok(find::find(model, &criteria)),
            Self::List => Ok(general::list(model)),
            Self::Pair(pair) => pair::pair(model, pair),
            Self::Unpair(pair) => pair::unpair(model, &pair),
            Self::Clear => Ok(general::clear(model)),
            Self::Help => Ok(general::help()),
            Self::Exit => Ok(general::exit()),
        }
    }
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Message for the user.
    pub feedback: String,
    /// The usage guide should be shown.
    pub show_help: bool,
    /// The displayed lists changed and should be shown again.
    pub show_lists: bool,
    /// The application should terminate.
    pub exit: bool,
}

impl CommandResult {
    /// A plain feedback message.
    #[must_use]
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    /// Mark the displayed lists as changed.
    #[must_use]
    pub fn with_lists(mut self) -> Self {
        self.show_lists = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mutating() {
        assert!(Command::Clear.is_mutating());
        assert!(Command::DeleteVolunteer(Index::from_zero_based(0)).is_mutating());
        assert!(!Command::List.is_mutating());
        assert!(!Command::Help.is_mutating());
        assert!(!Command::Find(FindCriteria::default()).is_mutating());
    }

    #[test]
    fn test_command_result_new() {
        let result = CommandResult::new("done");
        assert_eq!(result.feedback, "done");
        assert!(!result.show_help);
        assert!(!result.exit);
        assert!(result.with_lists().show_lists);
    }
}
