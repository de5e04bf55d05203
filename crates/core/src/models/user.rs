//! User, rating, and watchlist models for the Aniverse platform

use crate::types::WatchStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account
///
/// The credential lives only in the snapshot file; API responses carry
/// users with `password` stripped via [`User::without_password`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// Unique username; "admin" is reserved for the bootstrap account
    pub username: String,

    /// Stored credential, absent on API responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Administrative flag; admins may append catalog entries
    pub is_admin: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a regular (non-admin) account
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: Some(password.into()),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Copy of this user with the credential stripped
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }
}

/// A user's score for a catalog item
///
/// Scores are integers in [1,10]. At most one rating exists per
/// (user, item) pair; a later rating replaces the earlier one. No
/// timestamp is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub score: u8,
}

/// A user's watch status for a catalog item
///
/// At most one entry exists per (user, item) pair. An entry with status
/// `None` is never stored; the store removes it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub status: WatchStatus,
}
