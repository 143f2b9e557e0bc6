//! Error types for the store crate.

use crate::ordered_set::CapacityError;
use thiserror::Error;

/// Errors surfaced by the catalog and directory stores.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Name failed validation (empty, or non-alphanumeric characters)
    #[error("Illegal name: {name:?}")]
    InvalidName { name: String },

    /// User age outside the supported bounds
    #[error("Illegal age: {age}")]
    IllegalAge { age: i32 },

    /// Series episode count or duration failed validation
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// Entity with this key already exists in the store
    #[error("{kind} {name:?} already exists")]
    AlreadyExists { kind: &'static str, name: String },

    /// Referenced series doesn't exist in the catalog
    #[error("Series {name:?} not found")]
    SeriesNotFound { name: String },

    /// Referenced user doesn't exist in the directory
    #[error("User {username:?} not found")]
    UserNotFound { username: String },

    /// Backing storage could not grow
    #[error(transparent)]
    OutOfMemory(#[from] CapacityError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
