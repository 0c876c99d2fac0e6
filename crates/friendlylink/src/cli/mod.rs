//! Command-line interface for friendlylink.
//!
//! This module provides the CLI structure and output helpers for the
//! `friendlylink` binary.

mod commands;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ExecCommand, ListCommand, OutputFormat};

use crate::logging::Verbosity;

/// friendlylink - Pair volunteers with the elderly they look after
///
/// Keeps volunteer and elderly records, and the pairs between them, in
/// JSON files. Commands use the `prefix/value` syntax, e.g.
/// `add_elderly n/Bob p/98765432 ... r/HIGH`.
#[derive(Debug, Parser)]
#[command(name = "friendlylink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; defaults to `shell`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read commands from standard input, one per line
    Shell,

    /// Run a single command and exit
    Exec(ExecCommand),

    /// Print every volunteer, elderly person and pair
    List(ListCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "friendlylink");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::try_parse_from(["friendlylink"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_shell() {
        let cli = Cli::try_parse_from(["friendlylink", "shell"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Shell)));
    }

    #[test]
    fn test_parse_exec_keeps_words() {
        let cli =
            Cli::try_parse_from(["friendlylink", "exec", "find", "n/alice", "ag/30"]).unwrap();
        let Some(Command::Exec(exec)) = cli.command else {
            panic!("expected exec");
        };
        assert_eq!(exec.line(), "find n/alice ag/30");
    }

    #[test]
    fn test_parse_exec_requires_words() {
        assert!(Cli::try_parse_from(["friendlylink", "exec"]).is_err());
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["friendlylink", "list", "--format", "json"]).unwrap();
        let Some(Command::List(list)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(list.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["friendlylink", "config", "validate", "--file", "x.toml"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Validate { file: Some(_) }))
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["friendlylink", "-c", "/custom/config.toml", "shell"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["friendlylink", "-vv", "shell"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Debug);

        let cli = Cli::try_parse_from(["friendlylink", "-q", "shell"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }
}
