//! Catalog models for the Aniverse platform
//!
//! A catalog entry is a single rateable work (anime/manga series). Entries
//! are appended through the admin path and never deleted.

use crate::types::Genre;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A single rateable work in the catalog
///
/// The `genres` list is guaranteed non-empty for entries created through
/// the admin path; the boundary validates, the engine does not re-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique catalog identifier
    pub id: Uuid,

    /// Display title
    pub title: String,

    /// Synopsis shown on the detail view
    pub description: String,

    /// Cover image URL
    pub image_url: String,

    /// Genre tags, drawn from the fixed vocabulary
    pub genres: Vec<Genre>,

    /// When this entry was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Create a new catalog entry with a fresh id
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        genres: Vec<Genre>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            genres,
            created_at: Utc::now(),
        }
    }

    /// Check whether the entry carries a genre tag
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

/// Payload for the admin catalog-append endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCatalogItemRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,

    #[validate(length(max = 5000))]
    pub description: String,

    #[validate(url)]
    pub image_url: String,

    /// Genre tags; at least one is required
    #[validate(length(min = 1))]
    pub genres: Vec<Genre>,
}
