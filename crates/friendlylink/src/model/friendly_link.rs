//! The whole database: volunteers, elderly, and the pairs between them.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{Error, Result};

use super::information::Nric;
use super::pair::Pair;
use super::person::{Elderly, Volunteer};
use super::unique_list::UniquePersonList;

/// All records known to the application.
///
/// Every pair refers to an elderly and a volunteer NRIC present in the
/// lists; removing a person removes the pairs that mention them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendlyLink {
    volunteers: UniquePersonList<Volunteer>,
    elderly: UniquePersonList<Elderly>,
    pairs: Vec<Pair>,
}

impl FriendlyLink {
    /// Create an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from loaded parts, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePerson`] for repeated records, or
    /// [`Error::PersonNotFound`] for a pair naming an unknown NRIC.
    pub fn from_parts(
        volunteers: Vec<Volunteer>,
        elderly: Vec<Elderly>,
        pairs: Vec<Pair>,
    ) -> Result<Self> {
        let mut link = Self::new();
        link.volunteers.set_all(volunteers)?;
        link.elderly.set_all(elderly)?;
        for pair in pairs {
            link.add_pair(pair)?;
        }
        Ok(link)
    }

    // === Volunteers ===

    /// Volunteers in insertion order.
    #[must_use]
    pub fn volunteers(&self) -> &[Volunteer] {
        self.volunteers.as_slice()
    }

    /// Check if an identical volunteer exists.
    #[must_use]
    pub fn has_volunteer(&self, volunteer: &Volunteer) -> bool {
        self.volunteers.contains(volunteer)
    }

    /// Add a volunteer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePerson`] if an identical volunteer exists.
    pub fn add_volunteer(&mut self, volunteer: Volunteer) -> Result<()> {
        self.volunteers.add(volunteer)
    }

    /// Replace `target` with `edited`.
    ///
    /// If the NRIC changed and no other volunteer still holds the old one,
    /// its pairs move to the new NRIC. Pairs that would then repeat an
    /// existing pair are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is absent or `edited` duplicates another volunteer.
    pub fn set_volunteer(&mut self, target: &Volunteer, edited: Volunteer) -> Result<()> {
        let old_nric = target.nric.clone();
        let new_nric = edited.nric.clone();
        self.volunteers.set(target, edited)?;
        if old_nric != new_nric && self.volunteers.find_by_nric(&old_nric).is_none() {
            for pair in self.pairs.iter_mut().filter(|p| p.volunteer_nric == old_nric) {
                pair.volunteer_nric = new_nric.clone();
            }
            self.dedup_pairs();
        }
        Ok(())
    }

    /// Remove a volunteer and any pairs that mention their NRIC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if the volunteer is absent.
    pub fn remove_volunteer(&mut self, target: &Volunteer) -> Result<Volunteer> {
        let removed = self.volunteers.remove(target)?;
        if self.volunteers.find_by_nric(&removed.nric).is_none() {
            self.drop_pairs_where(|p| p.volunteer_nric == removed.nric);
        }
        Ok(removed)
    }

    /// First volunteer with the given NRIC.
    #[must_use]
    pub fn volunteer_by_nric(&self, nric: &Nric) -> Option<&Volunteer> {
        self.volunteers.find_by_nric(nric)
    }

    // === Elderly ===

    /// Elderly in insertion order.
    #[must_use]
    pub fn elderly(&self) -> &[Elderly] {
        self.elderly.as_slice()
    }

    /// Check if an identical elderly record exists.
    #[must_use]
    pub fn has_elderly(&self, elderly: &Elderly) -> bool {
        self.elderly.contains(elderly)
    }

    /// Add an elderly record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePerson`] if an identical record exists.
    pub fn add_elderly(&mut self, elderly: Elderly) -> Result<()> {
        self.elderly.add(elderly)
    }

    /// Replace `target` with `edited`, moving its pairs the same way as
    /// [`set_volunteer`](Self::set_volunteer).
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is absent or `edited` duplicates another record.
    pub fn set_elderly(&mut self, target: &Elderly, edited: Elderly) -> Result<()> {
        let old_nric = target.nric.clone();
        let new_nric = edited.nric.clone();
        self.elderly.set(target, edited)?;
        if old_nric != new_nric && self.elderly.find_by_nric(&old_nric).is_none() {
            for pair in self.pairs.iter_mut().filter(|p| p.elderly_nric == old_nric) {
                pair.elderly_nric = new_nric.clone();
            }
            self.dedup_pairs();
        }
        Ok(())
    }

    /// Remove an elderly record and any pairs that mention its NRIC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if the record is absent.
    pub fn remove_elderly(&mut self, target: &Elderly) -> Result<Elderly> {
        let removed = self.elderly.remove(target)?;
        if self.elderly.find_by_nric(&removed.nric).is_none() {
            self.drop_pairs_where(|p| p.elderly_nric == removed.nric);
        }
        Ok(removed)
    }

    /// First elderly record with the given NRIC.
    #[must_use]
    pub fn elderly_by_nric(&self, nric: &Nric) -> Option<&Elderly> {
        self.elderly.find_by_nric(nric)
    }

    // === Pairs ===

    /// Pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Check if the pair is already recorded.
    #[must_use]
    pub fn has_pair(&self, pair: &Pair) -> bool {
        self.pairs.contains(pair)
    }

    /// Record a pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if either NRIC is unknown, or
    /// [`Error::DuplicatePerson`] if the pair already exists.
    pub fn add_pair(&mut self, pair: Pair) -> Result<()> {
        if self.elderly_by_nric(&pair.elderly_nric).is_none() {
            return Err(Error::PersonNotFound { kind: "elderly" });
        }
        if self.volunteer_by_nric(&pair.volunteer_nric).is_none() {
            return Err(Error::PersonNotFound { kind: "volunteer" });
        }
        if self.has_pair(&pair) {
            return Err(Error::DuplicatePerson { kind: "pair" });
        }
        debug!(%pair, "Adding pair");
        self.pairs.push(pair);
        Ok(())
    }

    /// Remove a pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if the pair is not recorded.
    pub fn remove_pair(&mut self, pair: &Pair) -> Result<()> {
        let index = self
            .pairs
            .iter()
            .position(|p| p == pair)
            .ok_or(Error::PersonNotFound { kind: "pair" })?;
        self.pairs.remove(index);
        Ok(())
    }

    /// Volunteers paired with the elderly person holding `nric`.
    pub fn volunteers_paired_with<'a>(
        &'a self,
        nric: &'a Nric,
    ) -> impl Iterator<Item = &'a Nric> + 'a {
        self.pairs
            .iter()
            .filter(move |p| &p.elderly_nric == nric)
            .map(|p| &p.volunteer_nric)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        *self = Self::new();
        info!("Database cleared");
    }

    /// Check if there are no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volunteers.is_empty() && self.elderly.is_empty() && self.pairs.is_empty()
    }

    fn dedup_pairs(&mut self) {
        let mut seen = HashSet::with_capacity(self.pairs.len());
        let before = self.pairs.len();
        self.pairs.retain(|p| seen.insert(p.clone()));
        let dropped = before - self.pairs.len();
        if dropped > 0 {
            debug!(dropped, "Merged repeated pairs");
        }
    }

    fn drop_pairs_where(&mut self, predicate: impl Fn(&Pair) -> bool) {
        let before = self.pairs.len();
        self.pairs.retain(|p| !predicate(p));
        let dropped = before - self.pairs.len();
        if dropped > 0 {
            debug!(dropped, "Removed pairs of deleted person");
        }
    }
}
