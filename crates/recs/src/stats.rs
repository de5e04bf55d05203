//! Rating statistics: averages, histograms, and per-user profiles
//!
//! All operations are pure functions over the rating snapshot and share
//! the same deterministic tie-breaking policy as the recommender: stable
//! sorts over the input order.

use aniverse_core::{CatalogItem, Genre, Rating, MAX_SCORE, MIN_SCORE};
use serde::Serialize;
use uuid::Uuid;

/// Number of histogram buckets (one per score, 1 through 10)
pub const HISTOGRAM_BUCKETS: usize = 10;

/// How many genres a profile summary reports
const TOP_GENRE_COUNT: usize = 3;

/// Arithmetic mean of the scores, rounded to `precision` decimal places
///
/// Returns `None` for an empty list; callers render that as "N/A". The
/// catalog detail view rounds to 1 decimal, the profile view to 2.
pub fn average_score(ratings: &[Rating], precision: u32) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(r.score)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    let factor = 10f64.powi(precision as i32);
    Some((mean * factor).round() / factor)
}

/// Score counts for buckets 1 through 10
///
/// Every bucket is present even when zero. Scores outside [1,10] are
/// ignored.
pub fn score_histogram(ratings: &[Rating]) -> [u64; HISTOGRAM_BUCKETS] {
    let mut buckets = [0u64; HISTOGRAM_BUCKETS];
    for rating in ratings {
        if (MIN_SCORE..=MAX_SCORE).contains(&rating.score) {
            buckets[usize::from(rating.score) - 1] += 1;
        }
    }
    buckets
}

/// Summary of one user's rating activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStats {
    /// Number of items the user has rated
    pub total_rated: usize,
    /// Mean score over the user's ratings, 2 decimals; `None` without data
    pub average_score: Option<f64>,
    /// Up to three most frequent genres across the user's rated items
    pub top_genres: Vec<Genre>,
    /// Item id of the user's highest rating
    pub highest_rated: Option<Uuid>,
    /// Item id of the user's lowest rating
    pub lowest_rated: Option<Uuid>,
}

impl ProfileStats {
    fn zero_state() -> Self {
        Self {
            total_rated: 0,
            average_score: None,
            top_genres: Vec::new(),
            highest_rated: None,
            lowest_rated: None,
        }
    }
}

/// Profile statistics for `user_id` over the full rating set
///
/// Genre counts accumulate one per genre of each rated item, independent
/// of the score given. Ties in the genre ranking keep first-encounter
/// order; equal scores in the highest/lowest picks keep the input order
/// of the rating list. Items missing from `items` contribute nothing to
/// the genre tally but still count toward `total_rated` and the extremes.
pub fn user_profile(user_id: Uuid, ratings: &[Rating], items: &[CatalogItem]) -> ProfileStats {
    let user_ratings: Vec<Rating> = ratings
        .iter()
        .filter(|r| r.user_id == user_id)
        .copied()
        .collect();

    if user_ratings.is_empty() {
        return ProfileStats::zero_state();
    }

    let average = average_score(&user_ratings, 2);

    let mut genre_counts: Vec<(Genre, usize)> = Vec::new();
    for rating in &user_ratings {
        let Some(item) = items.iter().find(|i| i.id == rating.item_id) else {
            continue;
        };
        for genre in &item.genres {
            match genre_counts.iter_mut().find(|(g, _)| g == genre) {
                Some((_, count)) => *count += 1,
                None => genre_counts.push((*genre, 1)),
            }
        }
    }
    // Stable sort: equal counts keep first-encounter order.
    genre_counts.sort_by(|a, b| b.1.cmp(&a.1));
    let top_genres = genre_counts
        .iter()
        .take(TOP_GENRE_COUNT)
        .map(|(genre, _)| *genre)
        .collect();

    let mut by_score = user_ratings.clone();
    by_score.sort_by(|a, b| b.score.cmp(&a.score));
    let highest_rated = by_score.first().map(|r| r.item_id);
    let lowest_rated = by_score.last().map(|r| r.item_id);

    ProfileStats {
        total_rated: user_ratings.len(),
        average_score: average,
        top_genres,
        highest_rated,
        lowest_rated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user_id: Uuid, item_id: Uuid, score: u8) -> Rating {
        Rating {
            user_id,
            item_id,
            score,
        }
    }

    fn item(title: &str, genres: Vec<Genre>) -> CatalogItem {
        CatalogItem::new(title, "", "https://example.com/cover.jpg", genres)
    }

    #[test]
    fn test_average_of_empty_is_none() {
        assert_eq!(average_score(&[], 1), None);
    }

    #[test]
    fn test_average_rounding_precision() {
        let user = Uuid::new_v4();
        let ratings = vec![
            rating(user, Uuid::new_v4(), 7),
            rating(user, Uuid::new_v4(), 8),
            rating(user, Uuid::new_v4(), 8),
        ];

        // 23 / 3 = 7.666...
        assert_eq!(average_score(&ratings, 1), Some(7.7));
        assert_eq!(average_score(&ratings, 2), Some(7.67));
    }

    #[test]
    fn test_average_example_scenario() {
        let user = Uuid::new_v4();
        let scores = [1u8, 1, 10, 10];
        let ratings: Vec<Rating> = scores
            .iter()
            .map(|&s| rating(user, Uuid::new_v4(), s))
            .collect();

        assert_eq!(average_score(&ratings, 1), Some(5.5));
    }

    #[test]
    fn test_histogram_example_scenario() {
        let user = Uuid::new_v4();
        let scores = [1u8, 1, 10, 10];
        let ratings: Vec<Rating> = scores
            .iter()
            .map(|&s| rating(user, Uuid::new_v4(), s))
            .collect();

        let buckets = score_histogram(&ratings);
        assert_eq!(buckets[0], 2);
        assert_eq!(buckets[9], 2);
        assert_eq!(buckets[1..9].iter().sum::<u64>(), 0);
        assert_eq!(buckets.iter().sum::<u64>(), ratings.len() as u64);
    }

    #[test]
    fn test_histogram_ignores_out_of_range() {
        let user = Uuid::new_v4();
        let ratings = vec![
            rating(user, Uuid::new_v4(), 5),
            rating(user, Uuid::new_v4(), 0),
            rating(user, Uuid::new_v4(), 11),
        ];

        let buckets = score_histogram(&ratings);
        assert_eq!(buckets.iter().sum::<u64>(), 1);
        assert_eq!(buckets[4], 1);
    }

    #[test]
    fn test_profile_zero_state() {
        let stats = user_profile(Uuid::new_v4(), &[], &[]);

        assert_eq!(stats.total_rated, 0);
        assert_eq!(stats.average_score, None);
        assert!(stats.top_genres.is_empty());
        assert_eq!(stats.highest_rated, None);
        assert_eq!(stats.lowest_rated, None);
    }

    #[test]
    fn test_profile_top_genres_and_extremes() {
        let user = Uuid::new_v4();
        let a = item("A", vec![Genre::Action, Genre::Drama]);
        let b = item("B", vec![Genre::Action, Genre::SciFi]);
        let c = item("C", vec![Genre::Action, Genre::Drama, Genre::Romance]);
        let items = vec![a.clone(), b.clone(), c.clone()];

        let ratings = vec![
            rating(user, a.id, 9),
            rating(user, b.id, 4),
            rating(user, c.id, 7),
        ];

        let stats = user_profile(user, &ratings, &items);
        assert_eq!(stats.total_rated, 3);
        assert_eq!(stats.average_score, Some(6.67));
        // Action: 3, Drama: 2, then Sci-Fi (count 1) before Romance by
        // first encounter.
        assert_eq!(
            stats.top_genres,
            vec![Genre::Action, Genre::Drama, Genre::SciFi]
        );
        assert_eq!(stats.highest_rated, Some(a.id));
        assert_eq!(stats.lowest_rated, Some(b.id));
    }

    #[test]
    fn test_profile_extreme_ties_keep_input_order() {
        let user = Uuid::new_v4();
        let a = item("A", vec![Genre::Action]);
        let b = item("B", vec![Genre::Action]);
        let items = vec![a.clone(), b.clone()];

        let ratings = vec![rating(user, a.id, 8), rating(user, b.id, 8)];

        let stats = user_profile(user, &ratings, &items);
        assert_eq!(stats.highest_rated, Some(a.id));
        assert_eq!(stats.lowest_rated, Some(b.id));
    }

    #[test]
    fn test_profile_counts_unresolvable_items() {
        let user = Uuid::new_v4();
        let a = item("A", vec![Genre::Comedy]);
        let items = vec![a.clone()];

        let ghost = Uuid::new_v4();
        let ratings = vec![rating(user, a.id, 6), rating(user, ghost, 9)];

        let stats = user_profile(user, &ratings, &items);
        assert_eq!(stats.total_rated, 2);
        assert_eq!(stats.top_genres, vec![Genre::Comedy]);
        // The unresolved item still wins the highest-rated slot.
        assert_eq!(stats.highest_rated, Some(ghost));
    }
}
