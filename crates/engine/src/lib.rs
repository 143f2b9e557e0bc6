//! # Engine Crate
//!
//! The recommendation core: given a read-only [`Catalog`] and [`Directory`]
//! snapshot, produce a deterministic, per-genre ranked list of series for
//! one user.
//!
//! ## Architecture
//! One call runs the stages in sequence over every catalog series:
//! 1. **eligibility** drops favorites and age-restricted series
//! 2. **features** reads per-candidate features out of a per-call
//!    [`TasteProfile`]
//! 3. **ranker** folds the features into one integer score
//! 4. **selector** orders and caps the surviving candidates per genre
//!
//! The engine never mutates the stores and performs no locking; callers
//! hand it a stable snapshot. A call either yields the full output or a
//! single [`RecommendError`], never a partial list.
//!
//! ## Example Usage
//! ```ignore
//! use engine::recommend;
//!
//! let recs = recommend(&catalog, &directory, "Vered", 0)?;
//! for rec in recs {
//!     println!("{} ({})", rec.name, rec.genre);
//! }
//! ```

pub mod eligibility;
pub mod error;
pub mod features;
pub mod ranker;
pub mod selector;

// Re-export main types
pub use error::{RecommendError, Result};
pub use features::{CandidateFeatures, TasteProfile};
pub use selector::{RankedCandidate, Recommendation};

use store::{Catalog, Directory, OrderedSet};

/// One-shot, finite iterator over the recommendation output.
///
/// Restartable only by re-invoking [`recommend`].
#[derive(Debug)]
pub struct Recommendations {
    inner: std::vec::IntoIter<Recommendation>,
}

impl Iterator for Recommendations {
    type Item = Recommendation;

    fn next(&mut self) -> Option<Recommendation> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Recommendations {}

/// Computes recommendations for `username`.
///
/// # Arguments
/// * `catalog` - Snapshot of the known series
/// * `directory` - Snapshot of the known users
/// * `username` - Who to recommend for; must exist in the directory
/// * `per_genre_limit` - Max entries per genre group; 0 means no cap
///
/// # Returns
/// * `Ok(Recommendations)` - Ordered (name, genre) output
/// * `Err(RecommendError)` - Nothing was produced
pub fn recommend(
    catalog: &Catalog,
    directory: &Directory,
    username: &str,
    per_genre_limit: i32,
) -> Result<Recommendations> {
    if per_genre_limit < 0 {
        return Err(RecommendError::InvalidLimit(per_genre_limit));
    }
    let user = directory
        .lookup(username)
        .ok_or_else(|| RecommendError::UserNotFound(username.to_string()))?;

    let profile = TasteProfile::build(catalog, directory, user)?;

    let mut candidates = OrderedSet::new();
    for series in catalog.all() {
        if !eligibility::is_eligible(user, series) {
            continue;
        }
        let score = ranker::score(&profile.extract(series));
        candidates.insert(RankedCandidate {
            score,
            name: series.name.clone(),
            genre: series.genre,
        })?;
    }
    tracing::debug!(
        username,
        catalog_size = catalog.len(),
        eligible = candidates.len(),
        "scored eligible candidates"
    );

    let picks = selector::select(&candidates, per_genre_limit);
    tracing::debug!(username, emitted = picks.len(), "selection complete");

    Ok(Recommendations {
        inner: picks.into_iter(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Genre, Series};

    fn create_test_setup() -> (Catalog, Directory) {
        let mut catalog = Catalog::new();
        catalog
            .add(Series {
                name: "Kabab".to_string(),
                episodes: 4,
                genre: Genre::Drama,
                age_range: None,
                episode_duration: 40.0,
            })
            .unwrap();
        catalog
            .add(Series {
                name: "Suits".to_string(),
                episodes: 4,
                genre: Genre::Drama,
                age_range: None,
                episode_duration: 40.0,
            })
            .unwrap();

        let mut directory = Directory::new();
        directory.add_user("Vered", 57).unwrap();
        directory.add_user("Orian", 21).unwrap();
        directory.add_friend("Vered", "Orian").unwrap();
        directory.add_favorite("Vered", "Suits").unwrap();
        directory.add_favorite("Orian", "Kabab").unwrap();

        (catalog, directory)
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let (catalog, directory) = create_test_setup();
        assert_eq!(
            recommend(&catalog, &directory, "Vered", -1).unwrap_err(),
            RecommendError::InvalidLimit(-1)
        );
    }

    #[test]
    fn test_unknown_user_is_rejected() {
        let (catalog, directory) = create_test_setup();
        assert_eq!(
            recommend(&catalog, &directory, "Nobody", 0).unwrap_err(),
            RecommendError::UserNotFound("Nobody".to_string())
        );
    }

    #[test]
    fn test_basic_recommendation() {
        let (catalog, directory) = create_test_setup();
        let recs: Vec<_> = recommend(&catalog, &directory, "Vered", 0)
            .unwrap()
            .collect();

        // Kabab: same_genre 1 (Suits), friend_love 1 (Orian), durations
        // match -> score 1.
        assert_eq!(
            recs,
            vec![Recommendation {
                name: "Kabab".to_string(),
                genre: Genre::Drama,
            }]
        );
    }

    #[test]
    fn test_output_iterator_is_exact_size() {
        let (catalog, directory) = create_test_setup();
        let recs = recommend(&catalog, &directory, "Vered", 0).unwrap();
        assert_eq!(recs.len(), 1);
    }
}
