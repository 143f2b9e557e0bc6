//! Deterministic per-genre selection over the scored candidate set.

use store::{Genre, OrderedSet};

/// A scored candidate, transient to one recommendation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub score: i32,
    pub name: String,
    pub genre: Genre,
}

// Ranked candidates sort by descending score, ties broken by ascending
// name. This is the order the output is emitted in within each genre.
impl Ord for RankedCandidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for RankedCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// One entry of the recommendation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub name: String,
    pub genre: Genre,
}

/// Emits the surviving candidates, genre group by genre group.
///
/// ## Algorithm
/// 1. Zero-score candidates are discarded unconditionally.
/// 2. Genre groups come out in genre-rank order.
/// 3. Inside a group the candidate set's own order applies
///    (score desc, name asc), capped at `per_genre_limit` entries;
///    a limit of 0 means no cap.
pub fn select(candidates: &OrderedSet<RankedCandidate>, per_genre_limit: i32) -> Vec<Recommendation> {
    let mut picks = Vec::new();
    for genre in Genre::ALL {
        let mut remaining = per_genre_limit;
        for candidate in candidates {
            if candidate.genre != genre || candidate.score == 0 {
                continue;
            }
            if per_genre_limit > 0 && remaining == 0 {
                break;
            }
            picks.push(Recommendation {
                name: candidate.name.clone(),
                genre,
            });
            remaining -= 1;
        }
    }
    picks
}
