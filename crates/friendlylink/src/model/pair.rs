//! Links between an elderly person and a volunteer.

use std::fmt;

use super::information::Nric;

/// Assignment of a volunteer to an elderly person, keyed by NRIC.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    /// NRIC of the elderly person.
    pub elderly_nric: Nric,
    /// NRIC of the volunteer.
    pub volunteer_nric: Nric,
}

impl Pair {
    /// Create a pair.
    #[must_use]
    pub fn new(elderly_nric: Nric, volunteer_nric: Nric) -> Self {
        Self {
            elderly_nric,
            volunteer_nric,
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elderly {} <-> Volunteer {}",
            self.elderly_nric, self.volunteer_nric
        )
    }
}
