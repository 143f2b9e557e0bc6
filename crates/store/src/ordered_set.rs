//! A generic ordered set over a caller-supplied total order.
//!
//! `OrderedSet<T>` keeps unique elements sorted by `T: Ord` in a flat
//! vector, giving `O(log n)` membership tests and in-order iteration for
//! free. The total order is supplied by the element type itself (the
//! catalog's `Series` orders by genre rank then name, the engine's ranked
//! candidates by score then name), so one container serves both.
//!
//! Growth goes through [`Vec::try_reserve`], so running out of memory while
//! building a transient set surfaces as a [`CapacityError`] instead of an
//! abort.

use std::collections::TryReserveError;
use thiserror::Error;

/// Allocation failure while growing an [`OrderedSet`].
#[derive(Error, Debug, PartialEq, Eq)]
#[error("out of memory while growing ordered set")]
pub struct CapacityError;

impl From<TryReserveError> for CapacityError {
    fn from(_: TryReserveError) -> Self {
        CapacityError
    }
}

/// A set of unique elements kept sorted under the element type's `Ord`.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts `value`, keeping the set sorted.
    ///
    /// Returns `Ok(true)` if the value was inserted, `Ok(false)` if an equal
    /// element was already present (the set is left unchanged), and
    /// `Err(CapacityError)` if the backing storage could not grow.
    pub fn insert(&mut self, value: T) -> Result<bool, CapacityError> {
        match self.items.binary_search(&value) {
            Ok(_) => Ok(false),
            Err(index) => {
                self.items.try_reserve(1)?;
                self.items.insert(index, value);
                Ok(true)
            }
        }
    }

    /// Removes the element equal to `value`. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.binary_search(value) {
            Ok(index) => {
                self.items.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether an element equal to `value` is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.items.binary_search(value).is_ok()
    }

    /// Borrow the stored element equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.items
            .binary_search(value)
            .ok()
            .map(|index| &self.items[index])
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
