//! Catalog filtering for the browse view
//!
//! Combines the title search, minimum-average, genre, and per-viewer
//! filters into a single pass over the catalog.

use aniverse_core::{CatalogItem, Genre, Rating, WatchStatus, WatchlistEntry};
use serde::Deserialize;
use uuid::Uuid;

/// Filters applied to the catalog list
///
/// `rated_only` and `watch_status` only take effect when a viewer id is
/// supplied to [`filter_catalog`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFilters {
    /// Case-insensitive title substring
    pub search: Option<String>,

    /// Minimum global average score. Items without any ratings pass only
    /// while the threshold is at its floor (<= 1.0).
    pub min_average: Option<f64>,

    /// Genres that must all be present on the item
    #[serde(default)]
    pub genres: Vec<Genre>,

    /// Keep only items the viewer has rated
    #[serde(default)]
    pub rated_only: bool,

    /// Keep only items with this watch status for the viewer
    pub watch_status: Option<WatchStatus>,
}

impl CatalogFilters {
    /// Check if any filters are active
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.min_average.is_none()
            && self.genres.is_empty()
            && !self.rated_only
            && self.watch_status.is_none()
    }
}

/// Apply `filters` to the catalog, preserving catalog order
pub fn filter_catalog(
    items: &[CatalogItem],
    ratings: &[Rating],
    watchlists: &[WatchlistEntry],
    viewer: Option<Uuid>,
    filters: &CatalogFilters,
) -> Vec<CatalogItem> {
    let needle = filters
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    items
        .iter()
        .filter(|item| {
            if let Some(needle) = &needle {
                if !item.title.to_lowercase().contains(needle.as_str()) {
                    return false;
                }
            }

            if let Some(min_average) = filters.min_average {
                let (count, sum) = ratings
                    .iter()
                    .filter(|r| r.item_id == item.id)
                    .fold((0u32, 0u32), |(c, s), r| (c + 1, s + u32::from(r.score)));
                if count > 0 {
                    if f64::from(sum) / f64::from(count) < min_average {
                        return false;
                    }
                } else if min_average > 1.0 {
                    // Unrated items are hidden once the threshold is raised.
                    return false;
                }
            }

            if !filters.genres.is_empty()
                && !filters.genres.iter().all(|g| item.genres.contains(g))
            {
                return false;
            }

            if let Some(viewer_id) = viewer {
                if filters.rated_only
                    && !ratings
                        .iter()
                        .any(|r| r.user_id == viewer_id && r.item_id == item.id)
                {
                    return false;
                }

                if let Some(wanted) = filters.watch_status {
                    let status = watchlists
                        .iter()
                        .find(|w| w.user_id == viewer_id && w.item_id == item.id)
                        .map(|w| w.status)
                        .unwrap_or(WatchStatus::None);
                    if status != wanted {
                        return false;
                    }
                }
            }

            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, genres: Vec<Genre>) -> CatalogItem {
        CatalogItem::new(title, "", "https://example.com/cover.jpg", genres)
    }

    fn rating(user_id: Uuid, item_id: Uuid, score: u8) -> Rating {
        Rating {
            user_id,
            item_id,
            score,
        }
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let items = vec![item("A", vec![Genre::Action]), item("B", vec![Genre::Drama])];
        let filters = CatalogFilters::default();

        assert!(filters.is_empty());
        let kept = filter_catalog(&items, &[], &[], None, &filters);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = vec![
            item("Attack on Titan", vec![Genre::Action]),
            item("K-On!", vec![Genre::Comedy]),
        ];
        let filters = CatalogFilters {
            search: Some("titan".to_string()),
            ..CatalogFilters::default()
        };

        let kept = filter_catalog(&items, &[], &[], None, &filters);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Attack on Titan");
    }

    #[test]
    fn test_min_average_hides_low_rated() {
        let rated_high = item("High", vec![Genre::Action]);
        let rated_low = item("Low", vec![Genre::Action]);
        let user = Uuid::new_v4();
        let ratings = vec![rating(user, rated_high.id, 9), rating(user, rated_low.id, 3)];

        let filters = CatalogFilters {
            min_average: Some(5.0),
            ..CatalogFilters::default()
        };
        let kept = filter_catalog(
            &[rated_high.clone(), rated_low.clone()],
            &ratings,
            &[],
            None,
            &filters,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, rated_high.id);
    }

    #[test]
    fn test_unrated_item_passes_only_at_floor() {
        let unrated = item("Unrated", vec![Genre::Drama]);

        let at_floor = CatalogFilters {
            min_average: Some(1.0),
            ..CatalogFilters::default()
        };
        assert_eq!(
            filter_catalog(&[unrated.clone()], &[], &[], None, &at_floor).len(),
            1
        );

        let raised = CatalogFilters {
            min_average: Some(1.5),
            ..CatalogFilters::default()
        };
        assert!(filter_catalog(&[unrated], &[], &[], None, &raised).is_empty());
    }

    #[test]
    fn test_genres_use_and_semantics() {
        let both = item("Both", vec![Genre::Action, Genre::Drama]);
        let only_action = item("Action", vec![Genre::Action]);

        let filters = CatalogFilters {
            genres: vec![Genre::Action, Genre::Drama],
            ..CatalogFilters::default()
        };
        let kept = filter_catalog(
            &[both.clone(), only_action],
            &[],
            &[],
            None,
            &filters,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, both.id);
    }

    #[test]
    fn test_viewer_filters_ignored_without_viewer() {
        let a = item("A", vec![Genre::Action]);
        let filters = CatalogFilters {
            rated_only: true,
            watch_status: Some(WatchStatus::Watched),
            ..CatalogFilters::default()
        };

        let kept = filter_catalog(&[a], &[], &[], None, &filters);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_watch_status_missing_entry_reads_as_none() {
        let viewer = Uuid::new_v4();
        let listed = item("Listed", vec![Genre::Action]);
        let unlisted = item("Unlisted", vec![Genre::Action]);
        let watchlists = vec![WatchlistEntry {
            user_id: viewer,
            item_id: listed.id,
            status: WatchStatus::Watched,
        }];

        let want_watched = CatalogFilters {
            watch_status: Some(WatchStatus::Watched),
            ..CatalogFilters::default()
        };
        let kept = filter_catalog(
            &[listed.clone(), unlisted.clone()],
            &[],
            &watchlists,
            Some(viewer),
            &want_watched,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, listed.id);

        let want_none = CatalogFilters {
            watch_status: Some(WatchStatus::None),
            ..CatalogFilters::default()
        };
        let kept = filter_catalog(
            &[listed, unlisted.clone()],
            &[],
            &watchlists,
            Some(viewer),
            &want_none,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, unlisted.id);
    }

    #[test]
    fn test_filters_deserialize_with_defaults() {
        let filters: CatalogFilters = serde_json::from_str("{}").unwrap();
        assert!(filters.is_empty());

        let filters: CatalogFilters = serde_json::from_str(
            r#"{"search":"titan","genres":["Action","Sci-Fi"],"rated_only":true}"#,
        )
        .unwrap();
        assert_eq!(filters.genres, vec![Genre::Action, Genre::SciFi]);
        assert!(filters.rated_only);
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_rated_only_keeps_viewer_rated() {
        let viewer = Uuid::new_v4();
        let rated = item("Rated", vec![Genre::Action]);
        let unrated = item("Unrated", vec![Genre::Action]);
        let ratings = vec![rating(viewer, rated.id, 6)];

        let filters = CatalogFilters {
            rated_only: true,
            ..CatalogFilters::default()
        };
        let kept = filter_catalog(
            &[rated.clone(), unrated],
            &ratings,
            &[],
            Some(viewer),
            &filters,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, rated.id);
    }
}
