//! Aniverse Recommendation and Aggregation Engine
//!
//! Pure, deterministic computations over an immutable snapshot of the
//! rating dataset: collaborative-filtering recommendations, rating
//! statistics, and catalog filtering.
//!
//! The engine performs no I/O and holds no state between calls; every
//! invocation recomputes from the collections it is given, so concurrent
//! calls (including for different users) are safe by construction.

pub mod filter;
pub mod recommend;
pub mod similarity;
pub mod stats;

// Re-export key types
pub use filter::{filter_catalog, CatalogFilters};
pub use recommend::Recommender;
pub use similarity::{rank_neighbors, Neighbor};
pub use stats::{average_score, score_histogram, user_profile, ProfileStats, HISTOGRAM_BUCKETS};

/// Recommender tuning parameters
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Ratings the target user needs before recommendations are attempted
    /// (default: 10)
    pub min_ratings: usize,
    /// Common ratings required before a candidate's similarity is trusted
    /// (default: 3)
    pub min_overlap: usize,
    /// How many of the most similar users form the neighborhood (default: 5)
    pub neighborhood_size: usize,
    /// Neighbor score that counts as a strong endorsement (default: 8)
    pub endorsement_threshold: u8,
    /// Maximum recommendations returned (default: 5)
    pub max_recommendations: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            min_ratings: 10,
            min_overlap: 3,
            neighborhood_size: 5,
            endorsement_threshold: 8,
            max_recommendations: 5,
        }
    }
}
