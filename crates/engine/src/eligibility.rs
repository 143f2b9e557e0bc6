//! Eligibility filtering for candidate series.
//!
//! The first stage of the pipeline: there is no point scoring a series the
//! user has already joined or is not allowed to watch.

use store::{Series, User};

/// Whether `series` may be recommended to `user`.
///
/// ## Rules
/// - A series already in the user's favorites is never recommended.
/// - A series with an age range is eligible only if the user's age falls
///   inside it; both bounds are inclusive.
/// - A series without an age range is unrestricted.
pub fn is_eligible(user: &User, series: &Series) -> bool {
    if user.favorites.contains(&series.name) {
        return false;
    }
    match series.age_range {
        Some(range) => range.admits(user.age),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{AgeRange, Genre};

    fn series(name: &str, age_range: Option<AgeRange>) -> Series {
        Series {
            name: name.to_string(),
            episodes: 4,
            genre: Genre::Drama,
            age_range,
            episode_duration: 40.0,
        }
    }

    #[test]
    fn test_unrestricted_series_is_eligible() {
        let user = User::new("Vered", 57);
        assert!(is_eligible(&user, &series("Suits", None)));
    }

    #[test]
    fn test_age_window_is_inclusive_at_both_bounds() {
        let restricted = series("Stranger", Some(AgeRange { min: 29, max: 100 }));

        assert!(is_eligible(&User::new("AtMin", 29), &restricted));
        assert!(is_eligible(&User::new("AtMax", 100), &restricted));
        assert!(is_eligible(&User::new("Inside", 57), &restricted));
        assert!(!is_eligible(&User::new("Below", 28), &restricted));
        assert!(!is_eligible(&User::new("Above", 101), &restricted));
    }

    #[test]
    fn test_favorite_is_never_eligible() {
        let mut user = User::new("Vered", 57);
        user.favorites.insert("Suits".to_string());

        // Age-eligible but already joined.
        assert!(!is_eligible(&user, &series("Suits", None)));
        // The favorites check is independent of the age check.
        assert!(!is_eligible(
            &user,
            &series("Suits", Some(AgeRange { min: 6, max: 121 }))
        ));
    }
}
