//! Argument prefixes understood by the command parser.

use std::fmt;

/// A marker such as `n/` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    /// The literal text of the prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Person name.
pub const PREFIX_NAME: Prefix = Prefix("n/");
/// Phone number.
pub const PREFIX_PHONE: Prefix = Prefix("p/");
/// Email address.
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
/// Address.
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
/// NRIC.
pub const PREFIX_NRIC: Prefix = Prefix("ic/");
/// Age.
pub const PREFIX_AGE: Prefix = Prefix("ag/");
/// Elderly risk level.
pub const PREFIX_RISK: Prefix = Prefix("r/");
/// Free-form tag.
pub const PREFIX_TAG: Prefix = Prefix("t/");
/// Volunteer medical qualification.
pub const PREFIX_MEDICAL_TAG: Prefix = Prefix("mt/");
/// NRIC of the elderly side of a pair.
pub const PREFIX_ELDERLY_NRIC: Prefix = Prefix("eic/");
/// NRIC of the volunteer side of a pair.
pub const PREFIX_VOLUNTEER_NRIC: Prefix = Prefix("vic/");
