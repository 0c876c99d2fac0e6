//! Error types for friendlylink.
//!
//! This module defines all error types used throughout the friendlylink crate.
//! Most variants carry the exact message shown to the user.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for friendlylink operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Command Errors ===
    /// The command word was not recognised.
    #[error("Unknown command")]
    UnknownCommand,

    /// The command arguments could not be parsed.
    #[error("{message}")]
    Parse {
        /// Description of what went wrong, usually including usage text.
        message: String,
    },

    /// The command was well formed but could not be applied to the model.
    #[error("{message}")]
    Command {
        /// User-facing description of the failure.
        message: String,
    },

    // === Model Errors ===
    /// A field value violated its format constraint.
    #[error("{message}")]
    IllegalValue {
        /// The constraint message of the offending field.
        message: String,
    },

    /// A required field was absent from stored data.
    #[error("{kind}'s {field} field is missing!")]
    MissingField {
        /// The record kind (`Volunteer`, `Elderly`, `Pair`).
        kind: &'static str,
        /// The missing field's type name.
        field: &'static str,
    },

    /// A record equal to an existing one was inserted.
    #[error("duplicate {kind}")]
    DuplicatePerson {
        /// The record kind.
        kind: &'static str,
    },

    /// A record expected in a collection was not present.
    #[error("{kind} not found")]
    PersonNotFound {
        /// The record kind.
        kind: &'static str,
    },

    // === Storage Errors ===
    /// Stored data could not be converted into the model.
    #[error("failed to convert data in {path}: {message}")]
    DataConversion {
        /// File holding the offending data.
        path: PathBuf,
        /// Description of the conversion failure.
        message: String,
    },

    /// Failed to read a data file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for friendlylink operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a parse error for arguments that do not match a command's usage.
    #[must_use]
    pub fn invalid_format(usage: &str) -> Self {
        Self::parse(format!("Invalid command format! \n{usage}"))
    }

    /// Create a new command execution error.
    #[must_use]
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command {
            message: message.into(),
        }
    }

    /// Create a new illegal value error.
    #[must_use]
    pub fn illegal_value(message: impl Into<String>) -> Self {
        Self::IllegalValue {
            message: message.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(kind: &'static str, field: &'static str) -> Self {
        Self::MissingField { kind, field }
    }

    /// Check if this error came from user input rather than the environment.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand
                | Self::Parse { .. }
                | Self::Command { .. }
                | Self::IllegalValue { .. }
        )
    }
}
