//! JSON-file-backed snapshot store
//!
//! The persistence boundary: one `Snapshot` loaded at startup, read-only
//! clones served per request, full state persisted on every mutation.
//! Startup runs the admin reconciliation so the reserved account always
//! exists.

use aniverse_core::validation::{is_reserved_username, validate_score, validate_username};
use aniverse_core::{
    AniverseError, CatalogItem, CreateCatalogItemRequest, Rating, Snapshot, User, WatchStatus,
    WatchlistEntry,
};
use parking_lot::RwLock;
use std::path::PathBuf;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// Reserved username seeded at startup
const ADMIN_USERNAME: &str = "admin";

/// Snapshot store persisted as a single JSON file
pub struct JsonStore {
    path: PathBuf,
    state: RwLock<Snapshot>,
}

impl JsonStore {
    /// Open the store at `path`
    ///
    /// A missing file starts the store empty. The admin reconciliation
    /// runs before the store is handed out, seeding the reserved account
    /// with `admin_password` when absent.
    pub fn open(path: impl Into<PathBuf>, admin_password: &str) -> Result<Self, AniverseError> {
        let path = path.into();
        let snapshot = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            info!(path = %path.display(), "snapshot file missing, starting empty");
            Snapshot::default()
        };

        let store = Self {
            path,
            state: RwLock::new(snapshot),
        };
        store.bootstrap_admin(admin_password)?;
        Ok(store)
    }

    /// Ensure the reserved admin account exists. Idempotent.
    fn bootstrap_admin(&self, password: &str) -> Result<(), AniverseError> {
        {
            let state = self.state.read();
            if state
                .users
                .iter()
                .any(|u| u.username.eq_ignore_ascii_case(ADMIN_USERNAME))
            {
                return Ok(());
            }
        }

        info!("seeding reserved admin account");
        let mut admin = User::new(ADMIN_USERNAME, password);
        admin.is_admin = true;
        self.state.write().users.push(admin);
        self.persist()
    }

    /// Write the current state to the snapshot file
    fn persist(&self) -> Result<(), AniverseError> {
        let raw = {
            let state = self.state.read();
            serde_json::to_string_pretty(&*state)?
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Read-only clone of the full dataset
    pub fn snapshot(&self) -> Snapshot {
        self.state.read().clone()
    }

    /// Look up a user by id, credential stripped
    pub fn find_user(&self, user_id: Uuid) -> Option<User> {
        self.state
            .read()
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(User::without_password)
    }

    /// Look up a catalog item by id
    pub fn find_item(&self, item_id: Uuid) -> Option<CatalogItem> {
        self.state
            .read()
            .items
            .iter()
            .find(|i| i.id == item_id)
            .cloned()
    }

    /// Register a new account
    ///
    /// The username must pass shape validation, must not collide with the
    /// reserved name (case-insensitive), and must not already be taken.
    pub fn register_user(&self, username: &str, password: &str) -> Result<User, AniverseError> {
        validate_username(username)?;
        if is_reserved_username(username) {
            return Err(AniverseError::validation_field(
                "Username is unavailable",
                "username",
            ));
        }

        let user = {
            let mut state = self.state.write();
            if state.users.iter().any(|u| u.username == username) {
                return Err(AniverseError::validation_field(
                    "Username is unavailable",
                    "username",
                ));
            }
            let user = User::new(username, password);
            state.users.push(user.clone());
            user
        };

        self.persist()?;
        debug!(username, "registered user");
        Ok(user.without_password())
    }

    /// Check credentials, returning the user with the credential stripped
    pub fn login(&self, username: &str, password: &str) -> Result<User, AniverseError> {
        self.state
            .read()
            .users
            .iter()
            .find(|u| u.username == username && u.password.as_deref() == Some(password))
            .map(User::without_password)
            .ok_or_else(|| AniverseError::Unauthorized("Invalid credentials".to_string()))
    }

    /// Append a catalog entry (admin path)
    pub fn create_item(
        &self,
        request: CreateCatalogItemRequest,
    ) -> Result<CatalogItem, AniverseError> {
        request
            .validate()
            .map_err(|e| AniverseError::validation(e.to_string()))?;

        let item = CatalogItem::new(
            request.title,
            request.description,
            request.image_url,
            request.genres,
        );
        self.state.write().items.push(item.clone());
        self.persist()?;
        debug!(item_id = %item.id, "created catalog item");
        Ok(item)
    }

    /// Upsert one rating; a later score replaces the earlier one
    pub fn upsert_rating(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        score: u8,
    ) -> Result<Rating, AniverseError> {
        validate_score(score)?;

        let rating = {
            let mut state = self.state.write();
            if !state.users.iter().any(|u| u.id == user_id) {
                return Err(AniverseError::not_found("user", user_id));
            }
            if !state.items.iter().any(|i| i.id == item_id) {
                return Err(AniverseError::not_found("catalog item", item_id));
            }

            match state
                .ratings
                .iter_mut()
                .find(|r| r.user_id == user_id && r.item_id == item_id)
            {
                Some(existing) => {
                    existing.score = score;
                    *existing
                }
                None => {
                    let rating = Rating {
                        user_id,
                        item_id,
                        score,
                    };
                    state.ratings.push(rating);
                    rating
                }
            }
        };

        self.persist()?;
        Ok(rating)
    }

    /// Upsert a watch status; `None` removes the entry
    pub fn set_watch_status(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        status: WatchStatus,
    ) -> Result<WatchlistEntry, AniverseError> {
        {
            let mut state = self.state.write();
            if !state.users.iter().any(|u| u.id == user_id) {
                return Err(AniverseError::not_found("user", user_id));
            }
            if !state.items.iter().any(|i| i.id == item_id) {
                return Err(AniverseError::not_found("catalog item", item_id));
            }

            if status == WatchStatus::None {
                state
                    .watchlists
                    .retain(|w| !(w.user_id == user_id && w.item_id == item_id));
            } else {
                match state
                    .watchlists
                    .iter_mut()
                    .find(|w| w.user_id == user_id && w.item_id == item_id)
                {
                    Some(existing) => existing.status = status,
                    None => state.watchlists.push(WatchlistEntry {
                        user_id,
                        item_id,
                        status,
                    }),
                }
            }
        }

        self.persist()?;
        Ok(WatchlistEntry {
            user_id,
            item_id,
            status,
        })
    }
}
