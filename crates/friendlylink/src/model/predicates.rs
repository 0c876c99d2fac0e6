//! Filters used by `find` to narrow the displayed lists.
//!
//! Keyword predicates lower-case their keyword when constructed and match
//! case-insensitively by substring, so two predicates built from the same
//! keyword in different cases compare equal.

use std::fmt::Debug;

use super::information::{Age, Nric, RiskLevel};
use super::person::{Elderly, Person, Volunteer};

/// A test applied to each record of a list.
pub trait Predicate<T>: Debug {
    /// Check if `item` should be shown.
    fn test(&self, item: &T) -> bool;
}

/// Matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowAll;

impl<T> Predicate<T> for ShowAll {
    fn test(&self, _item: &T) -> bool {
        true
    }
}

/// Matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowNone;

impl<T> Predicate<T> for ShowNone {
    fn test(&self, _item: &T) -> bool {
        false
    }
}

/// Matches persons whose name contains the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameContainsKeywordPredicate {
    keyword: String,
}

impl NameContainsKeywordPredicate {
    /// Create a predicate for `keyword`, ignoring case.
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }
}

impl<T: Person> Predicate<T> for NameContainsKeywordPredicate {
    fn test(&self, item: &T) -> bool {
        item.name().as_str().to_lowercase().contains(&self.keyword)
    }
}

/// Matches persons whose tags contain the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagContainsKeywordPredicate {
    keyword: String,
}

impl TagContainsKeywordPredicate {
    /// Create a predicate for `keyword`, ignoring case.
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }
}

impl<T: Person> Predicate<T> for TagContainsKeywordPredicate {
    fn test(&self, item: &T) -> bool {
        item.tags()
            .iter()
            .any(|tag| tag.as_str().to_lowercase().contains(&self.keyword))
    }
}

/// Matches volunteers holding a medical qualification that contains the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MedicalQualificationContainsKeywordPredicate {
    keyword: String,
}

impl MedicalQualificationContainsKeywordPredicate {
    /// Create a predicate for `keyword`, ignoring case.
    #[must_use]
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }
}

impl Predicate<Volunteer> for MedicalQualificationContainsKeywordPredicate {
    fn test(&self, item: &Volunteer) -> bool {
        item.medical_tags()
            .iter()
            .any(|tag| tag.as_str().to_lowercase().contains(&self.keyword))
    }
}

/// Matches persons with exactly this NRIC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NricMatchesPredicate {
    nric: Nric,
}

impl NricMatchesPredicate {
    /// Create a predicate for `nric`.
    #[must_use]
    pub fn new(nric: Nric) -> Self {
        Self { nric }
    }
}

impl<T: Person> Predicate<T> for NricMatchesPredicate {
    fn test(&self, item: &T) -> bool {
        item.nric() == &self.nric
    }
}

/// Matches persons of exactly this age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeMatchesPredicate {
    age: Age,
}

impl AgeMatchesPredicate {
    /// Create a predicate for `age`.
    #[must_use]
    pub fn new(age: Age) -> Self {
        Self { age }
    }
}

impl<T: Person> Predicate<T> for AgeMatchesPredicate {
    fn test(&self, item: &T) -> bool {
        item.age() == self.age
    }
}

/// Matches elderly at this risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiskLevelMatchesPredicate {
    risk_level: RiskLevel,
}

impl RiskLevelMatchesPredicate {
    /// Create a predicate for `risk_level`.
    #[must_use]
    pub fn new(risk_level: RiskLevel) -> Self {
        Self { risk_level }
    }
}

impl Predicate<Elderly> for RiskLevelMatchesPredicate {
    fn test(&self, item: &Elderly) -> bool {
        item.risk_level() == self.risk_level
    }
}

/// Matches when every inner predicate matches.
#[derive(Debug)]
pub struct AllOf<T> {
    predicates: Vec<Box<dyn Predicate<T>>>,
}

impl<T> AllOf<T> {
    /// Combine `predicates`; an empty list matches everything.
    #[must_use]
    pub fn new(predicates: Vec<Box<dyn Predicate<T>>>) -> Self {
        Self { predicates }
    }
}

impl<T: Debug> Predicate<T> for AllOf<T> {
    fn test(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p.test(item))
    }
}
