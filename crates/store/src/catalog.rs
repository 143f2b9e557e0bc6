//! The series catalog.
//!
//! Owns every known [`Series`], kept in an [`OrderedSet`] whose total order
//! is (genre rank, name). Reports and the recommendation engine both rely
//! on that iteration order.

use crate::error::{Result, StoreError};
use crate::ordered_set::OrderedSet;
use crate::types::{is_valid_name, Series};

/// Owning store for series, ordered by genre rank then name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    series: OrderedSet<Series>,
}

impl Catalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self {
            series: OrderedSet::new(),
        }
    }

    /// Adds a series to the catalog.
    ///
    /// Validates the name, episode count, and episode duration, and clamps
    /// the age range (if any) into the system-wide bounds. Rejects a name
    /// that is already in use, whatever its genre.
    pub fn add(&mut self, mut series: Series) -> Result<()> {
        if !is_valid_name(&series.name) {
            return Err(StoreError::InvalidName { name: series.name });
        }
        if series.episodes < 1 {
            return Err(StoreError::InvalidValue {
                field: "episodes",
                value: series.episodes.to_string(),
            });
        }
        if !(series.episode_duration > 0.0) {
            return Err(StoreError::InvalidValue {
                field: "episode_duration",
                value: series.episode_duration.to_string(),
            });
        }
        if self.contains(&series.name) {
            return Err(StoreError::AlreadyExists {
                kind: "series",
                name: series.name,
            });
        }
        series.age_range = series.age_range.map(|range| range.clamped());
        self.series.insert(series)?;
        Ok(())
    }

    /// Removes the series with the given name.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let found = self
            .lookup(name)
            .cloned()
            .ok_or_else(|| StoreError::SeriesNotFound {
                name: name.to_string(),
            })?;
        self.series.remove(&found);
        Ok(())
    }

    /// Looks up a series by name.
    pub fn lookup(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.name == name)
    }

    /// Whether a series with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Iterate every series, ordered by genre rank then name.
    pub fn all(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Number of series in the catalog.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
