//! In-memory model with filtered views of each list.

use std::fmt;

use crate::error::Result;

use super::friendly_link::FriendlyLink;
use super::pair::Pair;
use super::person::{Elderly, Volunteer};
use super::predicates::{Predicate, ShowAll};

/// The state that commands operate on.
///
/// Holds the database plus the predicates currently narrowing the displayed
/// volunteer and elderly lists. Indices given by the user refer to the
/// filtered lists.
pub struct Model {
    friendly_link: FriendlyLink,
    volunteer_filter: Box<dyn Predicate<Volunteer>>,
    elderly_filter: Box<dyn Predicate<Elderly>>,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("friendly_link", &self.friendly_link)
            .field("volunteer_filter", &self.volunteer_filter)
            .field("elderly_filter", &self.elderly_filter)
            .finish()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(FriendlyLink::new())
    }
}

impl Model {
    /// Create a model showing every record of `friendly_link`.
    #[must_use]
    pub fn new(friendly_link: FriendlyLink) -> Self {
        Self {
            friendly_link,
            volunteer_filter: Box::new(ShowAll),
            elderly_filter: Box::new(ShowAll),
        }
    }

    /// The underlying database.
    #[must_use]
    pub fn friendly_link(&self) -> &FriendlyLink {
        &self.friendly_link
    }

    /// Replace the whole database and reset filters.
    pub fn set_friendly_link(&mut self, friendly_link: FriendlyLink) {
        self.friendly_link = friendly_link;
        self.show_all();
    }

    // === Volunteers ===

    /// Check if an identical volunteer exists.
    #[must_use]
    pub fn has_volunteer(&self, volunteer: &Volunteer) -> bool {
        self.friendly_link.has_volunteer(volunteer)
    }

    /// Add a volunteer and reset the volunteer filter so it is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if an identical volunteer exists.
    pub fn add_volunteer(&mut self, volunteer: Volunteer) -> Result<()> {
        self.friendly_link.add_volunteer(volunteer)?;
        self.volunteer_filter = Box::new(ShowAll);
        Ok(())
    }

    /// Replace `target` with `edited`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is absent or `edited` duplicates another volunteer.
    pub fn set_volunteer(&mut self, target: &Volunteer, edited: Volunteer) -> Result<()> {
        self.friendly_link.set_volunteer(target, edited)
    }

    /// Delete `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is absent.
    pub fn delete_volunteer(&mut self, target: &Volunteer) -> Result<Volunteer> {
        self.friendly_link.remove_volunteer(target)
    }

    /// Volunteers passing the current filter.
    #[must_use]
    pub fn filtered_volunteers(&self) -> Vec<&Volunteer> {
        self.friendly_link
            .volunteers()
            .iter()
            .filter(|v| self.volunteer_filter.test(v))
            .collect()
    }

    /// Narrow the displayed volunteers.
    pub fn update_volunteer_filter(&mut self, predicate: Box<dyn Predicate<Volunteer>>) {
        self.volunteer_filter = predicate;
    }

    // === Elderly ===

    /// Check if an identical elderly record exists.
    #[must_use]
    pub fn has_elderly(&self, elderly: &Elderly) -> bool {
        self.friendly_link.has_elderly(elderly)
    }

    /// Add an elderly record and reset the elderly filter so it is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if an identical record exists.
    pub fn add_elderly(&mut self, elderly: Elderly) -> Result<()> {
        self.friendly_link.add_elderly(elderly)?;
        self.elderly_filter = Box::new(ShowAll);
        Ok(())
    }

    /// Replace `target` with `edited`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is absent or `edited` duplicates another record.
    pub fn set_elderly(&mut self, target: &Elderly, edited: Elderly) -> Result<()> {
        self.friendly_link.set_elderly(target, edited)
    }

    /// Delete `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is absent.
    pub fn delete_elderly(&mut self, target: &Elderly) -> Result<Elderly> {
        self.friendly_link.remove_elderly(target)
    }

    /// Elderly passing the current filter.
    #[must_use]
    pub fn filtered_elderly(&self) -> Vec<&Elderly> {
        self.friendly_link
            .elderly()
            .iter()
            .filter(|e| self.elderly_filter.test(e))
            .collect()
    }

    /// Narrow the displayed elderly.
    pub fn update_elderly_filter(&mut self, predicate: Box<dyn Predicate<Elderly>>) {
        self.elderly_filter = predicate;
    }

    // === Pairs ===

    /// Check if the pair is recorded.
    #[must_use]
    pub fn has_pair(&self, pair: &Pair) -> bool {
        self.friendly_link.has_pair(pair)
    }

    /// Record a pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either person is unknown or the pair exists.
    pub fn add_pair(&mut self, pair: Pair) -> Result<()> {
        self.friendly_link.add_pair(pair)
    }

    /// Remove a pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is not recorded.
    pub fn delete_pair(&mut self, pair: &Pair) -> Result<()> {
        self.friendly_link.remove_pair(pair)
    }

    /// Remove all filters.
    pub fn show_all(&mut self) {
        self.volunteer_filter = Box::new(ShowAll);
        self.elderly_filter = Box::new(ShowAll);
    }
}
