//! One-based positions into the displayed lists.

use std::fmt;

/// A position as typed by the user, starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Build from a one-based position; `None` for 0.
    #[must_use]
    pub fn from_one_based(position: usize) -> Option<Self> {
        position.checked_sub(1).map(Self)
    }

    /// Build from a zero-based offset.
    #[must_use]
    pub fn from_zero_based(offset: usize) -> Self {
        Self(offset)
    }

    /// The zero-based offset.
    #[must_use]
    pub fn zero_based(self) -> usize {
        self.0
    }

    /// The one-based position.
    #[must_use]
    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
