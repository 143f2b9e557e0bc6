//! Combines candidate features into a single integer score.

use crate::features::CandidateFeatures;

/// Scores one candidate.
///
/// ## Formula
/// `floor((same_genre_count * friend_love_count)
///        / (1 + |candidate_duration - avg_favorite_duration|))`
///
/// The numerator rewards series whose genre matches many of the user's
/// favorites and that many friends already joined; the denominator pulls
/// the score down the further the candidate's episode duration sits from
/// the user's usual fare. The `+ 1` keeps the division defined when the two
/// durations coincide. The result is truncated to an integer; a candidate
/// with either numerator factor at zero scores 0 and is dropped by the
/// selector.
pub fn score(features: &CandidateFeatures) -> i32 {
    let numerator = f64::from(features.same_genre_count) * f64::from(features.friend_love_count);
    let denominator =
        1.0 + (features.candidate_duration - features.avg_favorite_duration).abs();
    (numerator / denominator) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(same: u32, love: u32, avg: f64, cand: f64) -> CandidateFeatures {
        CandidateFeatures {
            same_genre_count: same,
            friend_love_count: love,
            avg_favorite_duration: avg,
            candidate_duration: cand,
        }
    }

    #[test]
    fn test_matching_duration_keeps_full_product() {
        // 2 * 2 / (1 + 0) = 4
        assert_eq!(score(&features(2, 2, 40.0, 40.0)), 4);
    }

    #[test]
    fn test_duration_gap_divides_score() {
        // 3 * 4 / (1 + 2) = 4
        assert_eq!(score(&features(3, 4, 42.0, 40.0)), 4);
        // Gap direction doesn't matter.
        assert_eq!(score(&features(3, 4, 40.0, 42.0)), 4);
    }

    #[test]
    fn test_result_truncates_toward_zero() {
        // 1 * 3 / (1 + 1) = 1.5 -> 1
        assert_eq!(score(&features(1, 3, 40.0, 41.0)), 1);
        // 1 * 1 / (1 + 0.5) = 0.666... -> 0
        assert_eq!(score(&features(1, 1, 40.0, 40.5)), 0);
    }

    #[test]
    fn test_zero_factor_means_zero_score() {
        assert_eq!(score(&features(0, 10, 40.0, 40.0)), 0);
        assert_eq!(score(&features(10, 0, 40.0, 40.0)), 0);
    }
}
