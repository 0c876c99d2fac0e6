//! Ordered collection that rejects equal records.

use tracing::debug;

use crate::error::{Error, Result};

use super::person::Person;

/// An insertion-ordered list in which no two elements are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquePersonList<T> {
    items: Vec<T>,
}

impl<T> Default for UniquePersonList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Person + PartialEq> UniquePersonList<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an equal record is already stored.
    #[must_use]
    pub fn contains(&self, person: &T) -> bool {
        self.items.contains(person)
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePerson`] if an equal record is present.
    pub fn add(&mut self, person: T) -> Result<()> {
        if self.contains(&person) {
            return Err(Error::DuplicatePerson { kind: T::KIND });
        }
        debug!(kind = T::KIND, nric = %person.nric(), "Adding record");
        self.items.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if `target` is absent, or
    /// [`Error::DuplicatePerson`] if `edited` equals some other record.
    pub fn set(&mut self, target: &T, edited: T) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|p| p == target)
            .ok_or(Error::PersonNotFound { kind: T::KIND })?;

        if target != &edited && self.contains(&edited) {
            return Err(Error::DuplicatePerson { kind: T::KIND });
        }

        self.items[index] = edited;
        Ok(())
    }

    /// Remove the record equal to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if no such record exists.
    pub fn remove(&mut self, target: &T) -> Result<T> {
        let index = self
            .items
            .iter()
            .position(|p| p == target)
            .ok_or(Error::PersonNotFound { kind: T::KIND })?;
        Ok(self.items.remove(index))
    }

    /// Replace the whole contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePerson`] if `items` contains equal records,
    /// in which case the list is left unchanged.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<()> {
        if !Self::all_unique(&items) {
            return Err(Error::DuplicatePerson { kind: T::KIND });
        }
        self.items = items;
        Ok(())
    }

    /// Find the first record with the given NRIC.
    #[must_use]
    pub fn find_by_nric(&self, nric: &super::Nric) -> Option<&T> {
        self.items.iter().find(|p| p.nric() == nric)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// View the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn all_unique(items: &[T]) -> bool {
        items
            .iter()
            .enumerate()
            .all(|(i, a)| items[i + 1..].iter().all(|b| a != b))
    }
}

impl<'a, T> IntoIterator for &'a UniquePersonList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
