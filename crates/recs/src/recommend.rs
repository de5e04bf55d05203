//! Similarity-based recommendation pipeline
//!
//! Selects a neighborhood of the most similar users, then aggregates their
//! strong endorsements (scores at or above the threshold, on items the
//! target has not rated) into a ranked recommendation list.

use crate::similarity::rank_neighbors;
use crate::RecommenderConfig;
use aniverse_core::{CatalogItem, Rating, User};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Per-item endorsement accumulator
#[derive(Debug)]
struct Endorsement {
    item_id: Uuid,
    total_score: u32,
    count: u32,
}

/// Collaborative-filtering recommender over a rating snapshot
///
/// Stateless: every call recomputes from the supplied collections. There
/// is no caching and no staleness; the output always reflects exactly the
/// snapshot passed in.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(RecommenderConfig::default())
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Produce at most `max_recommendations` catalog items for `target_id`
    ///
    /// Returns an empty list when the target has fewer than `min_ratings`
    /// ratings (cold start), when no candidate clears `min_overlap`, or
    /// when no neighbor rating clears the endorsement threshold. Items the
    /// target has already rated are never returned. Never fails: absence
    /// of data yields an empty list.
    pub fn recommend(
        &self,
        target_id: Uuid,
        users: &[User],
        ratings: &[Rating],
        items: &[CatalogItem],
    ) -> Vec<CatalogItem> {
        let rated_by_target: HashSet<Uuid> = ratings
            .iter()
            .filter(|r| r.user_id == target_id)
            .map(|r| r.item_id)
            .collect();

        if rated_by_target.len() < self.config.min_ratings {
            return Vec::new();
        }

        let neighbors = rank_neighbors(
            target_id,
            users,
            ratings,
            self.config.min_overlap,
            self.config.neighborhood_size,
        );
        if neighbors.is_empty() {
            return Vec::new();
        }
        let neighborhood: HashSet<Uuid> = neighbors.iter().map(|n| n.user_id).collect();

        // Accumulators are kept in first-encounter order of the ratings
        // scan, so items with equal averages rank deterministically.
        let mut slot_by_item: HashMap<Uuid, usize> = HashMap::new();
        let mut endorsements: Vec<Endorsement> = Vec::new();

        for rating in ratings {
            if rating.score < self.config.endorsement_threshold
                || !neighborhood.contains(&rating.user_id)
                || rated_by_target.contains(&rating.item_id)
            {
                continue;
            }

            let slot = *slot_by_item.entry(rating.item_id).or_insert_with(|| {
                endorsements.push(Endorsement {
                    item_id: rating.item_id,
                    total_score: 0,
                    count: 0,
                });
                endorsements.len() - 1
            });
            endorsements[slot].total_score += u32::from(rating.score);
            endorsements[slot].count += 1;
        }

        let mut ranked: Vec<(Uuid, f64)> = endorsements
            .iter()
            .map(|e| (e.item_id, f64::from(e.total_score) / f64::from(e.count)))
            .collect();
        // Stable sort descending by average endorsement score.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(self.config.max_recommendations);

        // Ids missing from `items` are dropped rather than surfaced.
        ranked
            .into_iter()
            .filter_map(|(item_id, _)| items.iter().find(|i| i.id == item_id).cloned())
            .collect()
    }
}
