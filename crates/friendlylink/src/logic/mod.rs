//! Command handling: parse a line, run it against the model, persist.

pub mod commands;
mod index;
pub mod parser;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::model::sample::sample_friendly_link;
use crate::model::{FriendlyLink, Model};
use crate::storage::JsonStorage;

pub use commands::{Command, CommandResult};
pub use index::Index;
pub use parser::parse_command;

/// Ties the model to its storage.
///
/// Every command that changes data is followed by a save of the whole
/// database.
#[derive(Debug)]
pub struct Logic {
    model: Model,
    storage: JsonStorage,
}

impl Logic {
    /// Wrap an already-loaded model.
    #[must_use]
    pub fn new(model: Model, storage: JsonStorage) -> Self {
        Self { model, storage }
    }

    /// Load the database described by `config`.
    ///
    /// With no data files present, starts from the sample records when
    /// `seed_sample_data` is set and from an empty database otherwise.
    /// Unreadable or invalid data files are logged and replaced by an empty
    /// database in memory; the files themselves are left untouched until
    /// the next change.
    #[must_use]
    pub fn open(config: &Config) -> Self {
        let storage = JsonStorage::from_config(config);
        let link = match storage.read() {
            Ok(Some(link)) => link,
            Ok(None) if config.storage.seed_sample_data => {
                info!("Data files not found, starting with sample data");
                sample_friendly_link().unwrap_or_else(|e| {
                    warn!("Sample data is invalid: {e}");
                    FriendlyLink::new()
                })
            }
            Ok(None) => {
                info!("Data files not found, starting with an empty database");
                FriendlyLink::new()
            }
            Err(e) => {
                warn!("Data files could not be loaded, starting with an empty database: {e}");
                FriendlyLink::new()
            }
        };
        Self::new(Model::new(link), storage)
    }

    /// The model, with its current filters.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The backing store.
    #[must_use]
    pub fn storage(&self) -> &JsonStorage {
        &self.storage
    }

    /// Parse and run one line of user input.
    ///
    /// # Errors
    ///
    /// Returns the parse or command error to show the user, or a storage
    /// error if the change could not be saved.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        debug!(input, "Executing");
        let command = parse_command(input)?;
        let mutating = command.is_mutating();
        let result = command.execute(&mut self.model)?;
        if mutating {
            self.storage.save(self.model.friendly_link())?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use std::path::Path;

    fn config_in(dir: &Path, seed: bool) -> Config {
        let mut config = Config::default();
        config.storage.data_dir = Some(dir.to_path_buf());
        config.storage.seed_sample_data = seed;
        config
    }

    #[test]
    fn test_open_seeds_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let logic = Logic::open(&config_in(dir.path(), true));

        assert_eq!(logic.model().friendly_link().volunteers().len(), 3);
        assert!(logic.storage().is_fresh());
    }

    #[test]
    fn test_open_without_seed_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let logic = Logic::open(&config_in(dir.path(), false));

        assert!(logic.model().friendly_link().is_empty());
    }

    #[test]
    fn test_open_with_corrupt_file_starts_empty() {
        init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), true);
        std::fs::write(config.volunteers_path(), "[[[").unwrap();

        let logic = Logic::open(&config);
        assert!(logic.model().friendly_link().is_empty());
        assert_eq!(
            std::fs::read_to_string(config.volunteers_path()).unwrap(),
            "[[["
        );
    }

    #[test]
    fn test_mutating_command_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = Logic::open(&config_in(dir.path(), true));

        logic.execute("delete_volunteer 1").unwrap();
        let stored = logic.storage().read().unwrap().unwrap();
        assert_eq!(&stored, logic.model().friendly_link());
        assert_eq!(stored.volunteers().len(), 2);
    }

    #[test]
    fn test_read_only_command_does_not_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = Logic::open(&config_in(dir.path(), true));

        logic.execute("list").unwrap();
        logic.execute("find n/a").unwrap();
        assert!(logic.storage().is_fresh());
    }

    #[test]
    fn test_failed_command_does_not_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = Logic::open(&config_in(dir.path(), true));

        assert!(logic.execute("delete_elderly 99").is_err());
        assert!(logic.execute("bogus").is_err());
        assert!(logic.storage().is_fresh());
    }
}
