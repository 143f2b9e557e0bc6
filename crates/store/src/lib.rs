//! # Store Crate
//!
//! Domain types and owning stores for the series recommendation system.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Genre, AgeRange, Series, User) and
//!   validation rules
//! - **ordered_set**: Generic sorted container used by the catalog and by
//!   the engine's ranked candidate set
//! - **catalog**: Owning store for series, ordered by genre rank then name
//! - **directory**: Owning store for users, their friends and favorites
//! - **error**: Error types for store operations
//!
//! ## Example Usage
//!
//! ```
//! use store::{Catalog, Directory, Genre, Series};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Series {
//!     name: "Suits".to_string(),
//!     episodes: 4,
//!     genre: Genre::Drama,
//!     age_range: None,
//!     episode_duration: 40.0,
//! }).unwrap();
//!
//! let mut directory = Directory::new();
//! directory.add_user("Vered", 57).unwrap();
//! directory.add_favorite("Vered", "Suits").unwrap();
//!
//! assert!(catalog.contains("Suits"));
//! ```

// Public modules
pub mod catalog;
pub mod directory;
pub mod error;
pub mod ordered_set;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use directory::Directory;
pub use error::{Result, StoreError};
pub use ordered_set::{CapacityError, OrderedSet};
pub use types::{AgeRange, Genre, Series, User, MAX_AGE, MIN_AGE};
