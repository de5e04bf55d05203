//! Core type definitions for the Aniverse platform

use serde::{Deserialize, Serialize};

/// Minimum valid rating score
pub const MIN_SCORE: u8 = 1;

/// Maximum valid rating score
pub const MAX_SCORE: u8 = 10;

/// Genre tags for catalog entries
///
/// The catalog draws from a fixed tag vocabulary. Serialized names match
/// the display labels used by the web client ("Sci-Fi", "Slice of Life").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    #[serde(rename = "Slice of Life")]
    SliceOfLife,
    Supernatural,
    Thriller,
    Romance,
}

impl Genre {
    /// The full tag vocabulary, in display order.
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::SciFi,
        Genre::SliceOfLife,
        Genre::Supernatural,
        Genre::Thriller,
        Genre::Romance,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Action" => Some(Genre::Action),
            "Adventure" => Some(Genre::Adventure),
            "Comedy" => Some(Genre::Comedy),
            "Drama" => Some(Genre::Drama),
            "Fantasy" => Some(Genre::Fantasy),
            "Sci-Fi" => Some(Genre::SciFi),
            "Slice of Life" => Some(Genre::SliceOfLife),
            "Supernatural" => Some(Genre::Supernatural),
            "Thriller" => Some(Genre::Thriller),
            "Romance" => Some(Genre::Romance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::SciFi => "Sci-Fi",
            Genre::SliceOfLife => "Slice of Life",
            Genre::Supernatural => "Supernatural",
            Genre::Thriller => "Thriller",
            Genre::Romance => "Romance",
        }
    }
}

/// Watch status for a (user, item) pair
///
/// `None` is equivalent to having no watchlist entry at all: the store
/// deletes the entry when the status is set back to `None`, and a missing
/// entry reads as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    #[default]
    None,
    WantToWatch,
    Watched,
}
