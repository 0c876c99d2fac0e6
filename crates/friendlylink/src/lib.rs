//! `friendlylink` - records manager pairing volunteers with elderly people
//!
//! This library parses FriendlyLink's `prefix/value` commands, applies them
//! to the in-memory database, and keeps that database in JSON files.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod logic;
pub mod model;
pub mod storage;

#[cfg(test)]
mod testutil;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use logic::{Command, CommandResult, Logic};
pub use model::{Elderly, FriendlyLink, Model, Pair, Volunteer};
pub use storage::JsonStorage;
