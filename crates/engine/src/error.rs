//! Error types for the recommendation engine.

use store::CapacityError;
use thiserror::Error;

/// Errors surfaced by a recommendation call.
///
/// Every error aborts the whole call: no partial recommendation list is
/// ever produced.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecommendError {
    /// The per-genre limit was negative
    #[error("per-genre limit must be non-negative, got {0}")]
    InvalidLimit(i32),

    /// The requested user doesn't exist in the directory
    #[error("User {0:?} not found")]
    UserNotFound(String),

    /// A favorite series name couldn't be resolved in the catalog.
    ///
    /// Unlike a stale friend reference (tolerated, contributes zero), a
    /// dangling favorite means the catalog and directory have diverged and
    /// the call cannot produce a trustworthy answer.
    #[error("favorite series {series:?} of user {username:?} is not in the catalog")]
    MissingFavorite { username: String, series: String },

    /// The transient candidate set could not grow
    #[error(transparent)]
    OutOfMemory(#[from] CapacityError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
