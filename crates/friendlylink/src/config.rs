//! Configuration management for friendlylink.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "friendlylink";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FRIENDLYLINK_`)
/// 2. TOML config file at `~/.config/friendlylink/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Interactive shell configuration.
    pub shell: ShellConfig,
}

/// Where the data files live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the data files.
    /// Defaults to `~/.local/share/friendlylink`
    pub data_dir: Option<PathBuf>,
    /// File name of the volunteers file.
    pub volunteers_file: String,
    /// File name of the elderly file.
    pub elderly_file: String,
    /// File name of the pairs file.
    pub pairs_file: String,
    /// Start with sample records when no data file exists.
    pub seed_sample_data: bool,
}

/// Interactive shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before each command.
    pub prompt: String,
    /// Print the displayed lists after commands that change them.
    pub echo_results: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            volunteers_file: "volunteers.json".to_string(),
            elderly_file: "elderly.json".to_string(),
            pairs_file: "pairs.json".to_string(),
            seed_sample_data: true,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            echo_results: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("FRIENDLYLINK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let files = [
            ("volunteers_file", &self.storage.volunteers_file),
            ("elderly_file", &self.storage.elderly_file),
            ("pairs_file", &self.storage.pairs_file),
        ];

        for (key, name) in files {
            if name.trim().is_empty() {
                return Err(Error::ConfigValidation {
                    message: format!("{key} must not be empty"),
                });
            }
        }

        for (i, (key, name)) in files.iter().enumerate() {
            if let Some((other, _)) = files[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(Error::ConfigValidation {
                    message: format!("{key} and {other} must name different files ({name})"),
                });
            }
        }

        Ok(())
    }

    /// Get the data directory, resolving defaults if not set.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the volunteers file path.
    #[must_use]
    pub fn volunteers_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.volunteers_file)
    }

    /// Get the elderly file path.
    #[must_use]
    pub fn elderly_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.elderly_file)
    }

    /// Get the pairs file path.
    #[must_use]
    pub fn pairs_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.pairs_file)
    }
}
