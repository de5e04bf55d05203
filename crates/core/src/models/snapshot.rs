//! Point-in-time snapshot of the full dataset
//!
//! The snapshot is the boundary between the persistence layer and the
//! engine: one consistent, read-only view of every collection, handed to
//! each computation. The engine never mutates or persists it.

use crate::models::catalog::CatalogItem;
use crate::models::user::{Rating, User, WatchlistEntry};
use crate::types::WatchStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of the full dataset at a single point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub items: Vec<CatalogItem>,
    pub ratings: Vec<Rating>,
    pub watchlists: Vec<WatchlistEntry>,
}

impl Snapshot {
    /// Score a user gave an item, if any
    pub fn rating_for(&self, user_id: Uuid, item_id: Uuid) -> Option<u8> {
        self.ratings
            .iter()
            .find(|r| r.user_id == user_id && r.item_id == item_id)
            .map(|r| r.score)
    }

    /// Watch status for a (user, item) pair; a missing entry reads as `None`
    pub fn watch_status(&self, user_id: Uuid, item_id: Uuid) -> WatchStatus {
        self.watchlists
            .iter()
            .find(|w| w.user_id == user_id && w.item_id == item_id)
            .map(|w| w.status)
            .unwrap_or(WatchStatus::None)
    }

    /// Look up a catalog item by id
    pub fn item(&self, item_id: Uuid) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Look up a user by id
    pub fn user(&self, user_id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }
}
