//! User-user similarity over overlapping ratings
//!
//! Similarity between two users is the mean absolute score difference over
//! the items both have rated. Lower values mean closer agreement; 0.0 is
//! perfect agreement on every common rating.

use aniverse_core::{Rating, User};
use std::collections::HashMap;
use uuid::Uuid;

/// A candidate neighbor with its similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub user_id: Uuid,
    /// Mean absolute score difference over the overlap; lower is better
    pub score: f64,
    /// Number of items both users rated
    pub overlap: usize,
}

/// Rank the most similar users to `target_id`
///
/// Candidates are every other user, visited in `users` order. A candidate
/// with fewer than `min_overlap` common ratings is discarded. The result
/// is sorted ascending by similarity score with a stable sort, so ties
/// keep the `users` ordering, and truncated to `neighborhood_size`.
pub fn rank_neighbors(
    target_id: Uuid,
    users: &[User],
    ratings: &[Rating],
    min_overlap: usize,
    neighborhood_size: usize,
) -> Vec<Neighbor> {
    let target_ratings: Vec<Rating> = ratings
        .iter()
        .filter(|r| r.user_id == target_id)
        .copied()
        .collect();

    let mut scores_by_user: HashMap<Uuid, HashMap<Uuid, u8>> = HashMap::new();
    for rating in ratings {
        if rating.user_id == target_id {
            continue;
        }
        scores_by_user
            .entry(rating.user_id)
            .or_default()
            .insert(rating.item_id, rating.score);
    }

    let mut neighbors = Vec::new();
    for user in users.iter().filter(|u| u.id != target_id) {
        let Some(candidate_scores) = scores_by_user.get(&user.id) else {
            continue;
        };

        let mut overlap = 0usize;
        let mut total_difference = 0u32;
        for rating in &target_ratings {
            if let Some(&other_score) = candidate_scores.get(&rating.item_id) {
                overlap += 1;
                total_difference += u32::from(rating.score.abs_diff(other_score));
            }
        }

        if overlap >= min_overlap {
            neighbors.push(Neighbor {
                user_id: user.id,
                score: f64::from(total_difference) / overlap as f64,
                overlap,
            });
        }
    }

    // Stable sort: candidates with equal scores keep their `users` order.
    neighbors.sort_by(|a, b| a.score.total_cmp(&b.score));
    neighbors.truncate(neighborhood_size);
    neighbors
}
