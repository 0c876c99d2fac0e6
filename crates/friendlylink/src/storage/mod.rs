//! Storage layer for friendlylink.
//!
//! The database is kept in three pretty-printed JSON files, one each for
//! volunteers, elderly and pairs. Records are re-validated on every load.

pub mod adapted;
pub mod serializable;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::FriendlyLink;

use serializable::{JsonSerializableElderly, JsonSerializablePairs, JsonSerializableVolunteers};

/// File-backed store for a [`FriendlyLink`] database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStorage {
    volunteers_path: PathBuf,
    elderly_path: PathBuf,
    pairs_path: PathBuf,
}

impl JsonStorage {
    /// Create a store over the three given files.
    #[must_use]
    pub fn new(
        volunteers_path: impl Into<PathBuf>,
        elderly_path: impl Into<PathBuf>,
        pairs_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            volunteers_path: volunteers_path.into(),
            elderly_path: elderly_path.into(),
            pairs_path: pairs_path.into(),
        }
    }

    /// Create a store using the file locations from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.volunteers_path(),
            config.elderly_path(),
            config.pairs_path(),
        )
    }

    /// Path of the volunteers file.
    #[must_use]
    pub fn volunteers_path(&self) -> &Path {
        &self.volunteers_path
    }

    /// Path of the elderly file.
    #[must_use]
    pub fn elderly_path(&self) -> &Path {
        &self.elderly_path
    }

    /// Path of the pairs file.
    #[must_use]
    pub fn pairs_path(&self) -> &Path {
        &self.pairs_path
    }

    /// Check if none of the data files exist yet.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        !self.volunteers_path.exists() && !self.elderly_path.exists() && !self.pairs_path.exists()
    }

    /// Load the database.
    ///
    /// Returns `Ok(None)` when no data file exists. A missing file alongside
    /// existing ones is read as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if a file cannot be read, or
    /// [`Error::DataConversion`] if its contents are malformed or break a
    /// model invariant.
    pub fn read(&self) -> Result<Option<FriendlyLink>> {
        if self.is_fresh() {
            debug!("No data files found");
            return Ok(None);
        }

        let volunteers = read_document::<JsonSerializableVolunteers>(&self.volunteers_path)?
            .to_model_type()
            .map_err(|e| conversion_error(&self.volunteers_path, &e))?;
        let elderly = read_document::<JsonSerializableElderly>(&self.elderly_path)?
            .to_model_type()
            .map_err(|e| conversion_error(&self.elderly_path, &e))?;
        let pairs = read_document::<JsonSerializablePairs>(&self.pairs_path)?
            .to_model_type()
            .map_err(|e| conversion_error(&self.pairs_path, &e))?;

        let link = FriendlyLink::from_parts(volunteers, elderly, pairs).map_err(|e| {
            let path = match &e {
                Error::DuplicatePerson { kind: "volunteer" } => &self.volunteers_path,
                Error::DuplicatePerson { kind: "elderly" } => &self.elderly_path,
                _ => &self.pairs_path,
            };
            conversion_error(path, &e)
        })?;

        info!(
            volunteers = link.volunteers().len(),
            elderly = link.elderly().len(),
            pairs = link.pairs().len(),
            "Loaded data files"
        );
        Ok(Some(link))
    }

    /// Write the whole database, creating parent directories as needed.
    ///
    /// Each document is first written beside its target and then renamed
    /// into place, pairs last. No file is replaced unless all three
    /// documents were staged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryCreate`] or [`Error::FileWrite`] if a file
    /// cannot be written.
    pub fn save(&self, link: &FriendlyLink) -> Result<()> {
        let documents = [
            (
                &self.volunteers_path,
                serde_json::to_string_pretty(&JsonSerializableVolunteers::from(link))?,
            ),
            (
                &self.elderly_path,
                serde_json::to_string_pretty(&JsonSerializableElderly::from(link))?,
            ),
            (
                &self.pairs_path,
                serde_json::to_string_pretty(&JsonSerializablePairs::from(link))?,
            ),
        ];

        let mut staged = Vec::with_capacity(documents.len());
        for (path, json) in &documents {
            match stage_document(path, json) {
                Ok(staging) => staged.push((staging, path.as_path())),
                Err(e) => {
                    for (staging, _) in &staged {
                        discard_staged(staging);
                    }
                    return Err(e);
                }
            }
        }

        for (staging, path) in staged {
            std::fs::rename(&staging, path).map_err(|source| Error::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
        debug!("Saved data files");
        Ok(())
    }
}

fn conversion_error(path: &Path, err: &Error) -> Error {
    Error::DataConversion {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn read_document<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        debug!("{} not found, treating as empty", path.display());
        return Ok(T::default());
    }

    let text = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| Error::DataConversion {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsStr::to_os_string).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn stage_document(path: &Path, json: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let staging = staging_path(path);
    std::fs::write(&staging, json).map_err(|source| Error::FileWrite {
        path: staging.clone(),
        source,
    })?;
    Ok(staging)
}

fn discard_staged(staging: &Path) {
    if let Err(e) = std::fs::remove_file(staging) {
        warn!("Could not remove {}: {e}", staging.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_friendly_link;
    use crate::model::Pair;
    use crate::testutil::{alice_volunteer, bob_elderly};

    fn create_test_storage(dir: &Path) -> JsonStorage {
        JsonStorage::new(
            dir.join("volunteers.json"),
            dir.join("elderly.json"),
            dir.join("pairs.json"),
        )
    }

    #[test]
    fn test_read_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());

        assert!(storage.is_fresh());
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_save_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());
        let link = sample_friendly_link().unwrap();

        storage.save(&link).unwrap();
        assert!(!storage.is_fresh());
        assert_eq!(storage.read().unwrap(), Some(link));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(&dir.path().join("nested").join("data"));

        storage.save(&FriendlyLink::new()).unwrap();
        assert!(storage.volunteers_path().exists());
        assert!(storage.elderly_path().exists());
        assert!(storage.pairs_path().exists());
    }

    #[test]
    fn test_save_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());

        storage.save(&sample_friendly_link().unwrap()).unwrap();
        let mut names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, ["elderly.json", "pairs.json", "volunteers.json"]);
    }

    #[test]
    fn test_failed_save_keeps_previous_files() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let storage = JsonStorage::new(
            dir.path().join("volunteers.json"),
            dir.path().join("elderly.json"),
            blocker.join("pairs.json"),
        );
        std::fs::write(storage.volunteers_path(), r#"{"volunteers": []}"#).unwrap();

        let err = storage.save(&sample_friendly_link().unwrap()).unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));

        let text = std::fs::read_to_string(storage.volunteers_path()).unwrap();
        assert_eq!(text, r#"{"volunteers": []}"#);
        assert!(!storage.elderly_path().exists());
        assert!(!dir.path().join("volunteers.json.tmp").exists());
        assert!(!dir.path().join("elderly.json.tmp").exists());
    }

    #[test]
    fn test_saved_file_is_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());
        let mut link = FriendlyLink::new();
        link.add_volunteer(alice_volunteer()).unwrap();

        storage.save(&link).unwrap();
        let text = std::fs::read_to_string(storage.volunteers_path()).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.contains("\"medicalTags\""));
    }

    #[test]
    fn test_read_missing_file_alongside_existing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());
        std::fs::write(storage.volunteers_path(), r#"{"volunteers": []}"#).unwrap();

        let link = storage.read().unwrap().unwrap();
        assert!(link.is_empty());
    }

    #[test]
    fn test_read_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());
        std::fs::write(storage.elderly_path(), "{ not json").unwrap();

        let err = storage.read().unwrap_err();
        assert!(matches!(
            err,
            Error::DataConversion { ref path, .. } if path.ends_with("elderly.json")
        ));
    }

    #[test]
    fn test_read_missing_risk_level() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());
        std::fs::write(
            storage.elderly_path(),
            r#"{"elderly": [{"name": "Bob Choo", "phone": "98765432",
                "email": "elderly@example.com", "address": "Clementi",
                "nric": "S7654321C", "age": "88"}]}"#,
        )
        .unwrap();

        let err = storage.read().unwrap_err();
        assert!(err.to_string().contains("Elderly's RiskLevel field is missing!"));
    }

    #[test]
    fn test_read_duplicate_volunteers() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());
        let doc = JsonSerializableVolunteers {
            volunteers: vec![(&alice_volunteer()).into(), (&alice_volunteer()).into()],
        };
        std::fs::write(
            storage.volunteers_path(),
            serde_json::to_string(&doc).unwrap(),
        )
        .unwrap();

        let err = storage.read().unwrap_err();
        assert!(matches!(
            err,
            Error::DataConversion { ref path, .. } if path.ends_with("volunteers.json")
        ));
    }

    #[test]
    fn test_read_pair_with_unknown_person() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_test_storage(dir.path());
        let doc = JsonSerializablePairs {
            pairs: vec![(&Pair::new(bob_elderly().nric, alice_volunteer().nric)).into()],
        };
        std::fs::write(storage.pairs_path(), serde_json::to_string(&doc).unwrap()).unwrap();

        let err = storage.read().unwrap_err();
        assert!(matches!(
            err,
            Error::DataConversion { ref path, .. } if path.ends_with("pairs.json")
        ));
    }
}
