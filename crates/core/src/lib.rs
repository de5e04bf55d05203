//! # Aniverse Core
//!
//! Core data structures and types for the Aniverse platform.
//!
//! This crate provides the fundamental building blocks for the catalog,
//! user accounts, ratings, watchlists, and error handling shared by the
//! Aniverse services.
//!
//! ## Modules
//!
//! - `types`: Core type definitions and enums
//! - `models`: Domain models for catalog entries, users, and snapshots
//! - `error`: Error types and handling
//! - `validation`: Validation utilities and functions
//! - `config`: Configuration loading and validation
//! - `observability`: Structured logging initialization

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::{load_dotenv, ConfigLoader, ServiceConfig, StoreConfig};
pub use error::AniverseError;
pub use models::catalog::{CatalogItem, CreateCatalogItemRequest};
pub use models::snapshot::Snapshot;
pub use models::user::{Rating, User, WatchlistEntry};
pub use models::{catalog, snapshot, user};
pub use observability::{init_logging, LogConfig, LogFormat};
pub use types::{Genre, WatchStatus, MAX_SCORE, MIN_SCORE};

/// Result type alias for Aniverse operations
pub type Result<T> = std::result::Result<T, AniverseError>;
