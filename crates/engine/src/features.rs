//! Feature extraction for candidate scoring.
//!
//! All per-user aggregates are computed once per recommendation call into a
//! [`TasteProfile`], then each candidate series reads its features out of
//! the profile in O(1). This avoids re-walking the favorites list for every
//! series in the catalog.

use crate::error::{RecommendError, Result};
use std::collections::HashMap;
use store::{Catalog, Directory, Genre, Series, User};

/// The numeric features driving a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateFeatures {
    /// How many of the user's favorites share the candidate's genre.
    pub same_genre_count: u32,
    /// How many of the user's direct friends favorite the candidate.
    pub friend_love_count: u32,
    /// Mean episode duration over the user's favorites (0 if none).
    pub avg_favorite_duration: f64,
    /// The candidate's own episode duration.
    pub candidate_duration: f64,
}

/// Per-call aggregate of one user's taste, shared by every candidate.
#[derive(Debug, Clone)]
pub struct TasteProfile {
    genre_counts: HashMap<Genre, u32>,
    avg_favorite_duration: f64,
    /// For each series name, how many of the user's friends favorite it.
    friend_love: HashMap<String, u32>,
}

impl TasteProfile {
    /// Builds the profile for `user`.
    ///
    /// Every favorite must resolve in the catalog; a dangling favorite is a
    /// fatal [`RecommendError::MissingFavorite`]. A friend name missing from
    /// the directory is a stale reference and simply contributes nothing.
    pub fn build(catalog: &Catalog, directory: &Directory, user: &User) -> Result<Self> {
        let mut genre_counts = HashMap::new();
        let mut total_duration = 0.0;
        for name in &user.favorites {
            let series =
                catalog
                    .lookup(name)
                    .ok_or_else(|| RecommendError::MissingFavorite {
                        username: user.username.clone(),
                        series: name.clone(),
                    })?;
            *genre_counts.entry(series.genre).or_insert(0) += 1;
            total_duration += series.episode_duration;
        }
        let avg_favorite_duration = if user.favorites.is_empty() {
            0.0
        } else {
            total_duration / user.favorites.len() as f64
        };

        let mut friend_love: HashMap<String, u32> = HashMap::new();
        for friend_name in &user.friends {
            let Some(friend) = directory.lookup(friend_name) else {
                // Friend lists aren't kept in sync with user removal.
                continue;
            };
            for favorite in &friend.favorites {
                *friend_love.entry(favorite.clone()).or_insert(0) += 1;
            }
        }

        Ok(Self {
            genre_counts,
            avg_favorite_duration,
            friend_love,
        })
    }

    /// Reads the features of one candidate series out of the profile.
    pub fn extract(&self, series: &Series) -> CandidateFeatures {
        CandidateFeatures {
            same_genre_count: self.genre_counts.get(&series.genre).copied().unwrap_or(0),
            friend_love_count: self.friend_love.get(&series.name).copied().unwrap_or(0),
            avg_favorite_duration: self.avg_favorite_duration,
            candidate_duration: series.episode_duration,
        }
    }
}
