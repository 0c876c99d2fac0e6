//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Exec command arguments.
#[derive(Debug, Args)]
pub struct ExecCommand {
    /// The command line to run, e.g. `find n/alice`
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub words: Vec<String>,

    /// Also print the displayed lists afterwards
    #[arg(short, long)]
    pub show: bool,
}

impl ExecCommand {
    /// The words joined back into a single command line.
    #[must_use]
    pub fn line(&self) -> String {
        self.words.join(" ")
    }
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered plain text
    #[default]
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_exec_line() {
        let exec = ExecCommand {
            words: vec!["find".to_string(), "n/alice".to_string(), "t/friends".to_string()],
            show: false,
        };
        assert_eq!(exec.line(), "find n/alice t/friends");
    }
}
