//! Core domain types for the series library.
//!
//! This module defines the fundamental data structures used throughout the
//! system: genres, series, users, and the validation rules that the stores
//! enforce when entities are created.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// System-wide bounds
// =============================================================================

/// Minimum supported age. User ages must be strictly above this.
pub const MIN_AGE: i32 = 6;

/// Maximum supported age. User ages must be strictly below this.
pub const MAX_AGE: i32 = 121;

// =============================================================================
// Genre
// =============================================================================

/// Series genres, as a fixed enumeration.
///
/// Declaration order is the *genre rank*: recommendation output is grouped
/// by this order, not by the alphabetical order of the labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Genre {
    SciFi,
    Drama,
    Comedy,
    Crime,
    Mystery,
    Documentary,
    Romance,
    Horror,
}

impl Genre {
    /// All genres in rank order. Used when emitting per-genre groups.
    pub const ALL: [Genre; 8] = [
        Genre::SciFi,
        Genre::Drama,
        Genre::Comedy,
        Genre::Crime,
        Genre::Mystery,
        Genre::Documentary,
        Genre::Romance,
        Genre::Horror,
    ];

    /// Upper-case report label for this genre.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::SciFi => "SCIENCE_FICTION",
            Genre::Drama => "DRAMA",
            Genre::Comedy => "COMEDY",
            Genre::Crime => "CRIME",
            Genre::Mystery => "MYSTERY",
            Genre::Documentary => "DOCUMENTARY",
            Genre::Romance => "ROMANCE",
            Genre::Horror => "HORROR",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Age range
// =============================================================================

/// Inclusive viewer age window for a series.
///
/// A series without an `AgeRange` is unrestricted; the field is therefore
/// carried as `Option<AgeRange>` on [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: i32,
    pub max: i32,
}

impl AgeRange {
    /// Clamp this range into the system-wide [`MIN_AGE`, `MAX_AGE`] bounds.
    pub fn clamped(self) -> AgeRange {
        AgeRange {
            min: self.min.max(MIN_AGE),
            max: self.max.min(MAX_AGE),
        }
    }

    /// Whether `age` falls inside the window. Both bounds are inclusive.
    pub fn admits(&self, age: i32) -> bool {
        self.min <= age && age <= self.max
    }
}

// =============================================================================
// Series
// =============================================================================

/// A series in the catalog. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Unique key. Non-empty, ASCII alphanumeric only.
    pub name: String,
    pub episodes: u32,
    pub genre: Genre,
    /// `None` means the series is unrestricted.
    pub age_range: Option<AgeRange>,
    /// Average episode duration in minutes. Always > 0.
    pub episode_duration: f64,
}

// The catalog key is (genre rank, name); equality and ordering ignore the
// remaining fields, and the catalog never holds two entries with the same
// key.
impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.genre == other.genre && self.name == other.name
    }
}

impl Eq for Series {}

impl Ord for Series {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.genre
            .cmp(&other.genre)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Series {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// User
// =============================================================================

/// A user in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique key. Same validity rule as series names.
    pub username: String,
    pub age: i32,
    /// Usernames this user follows. The relation is directed: appearing in
    /// this set says nothing about the other user's friend set.
    pub friends: BTreeSet<String>,
    /// Names of the series this user has joined.
    pub favorites: BTreeSet<String>,
}

impl User {
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: username.into(),
            age,
            friends: BTreeSet::new(),
            favorites: BTreeSet::new(),
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Whether `name` is a legal series name or username: non-empty and made of
/// ASCII letters and digits only.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Whether `age` is a legal user age: strictly between the system bounds.
pub fn is_valid_age(age: i32) -> bool {
    MIN_AGE < age && age < MAX_AGE
}
