//! Validation utilities for Aniverse data structures
//!
//! Provides validation functions and regex patterns for common validation
//! scenarios. Validation happens at the service boundary; the engine
//! assumes valid input.

use crate::error::AniverseError;
use crate::types::{MAX_SCORE, MIN_SCORE};
use once_cell::sync::Lazy;
use regex::Regex;

/// Username pattern: 3-32 word characters
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{3,32}$").expect("Failed to compile username regex"));

/// Usernames that can never be registered, checked case-insensitively
pub const RESERVED_USERNAMES: [&str; 1] = ["admin"];

/// Validate a rating score against the [1,10] range
///
/// # Examples
///
/// ```
/// use aniverse_core::validation::validate_score;
///
/// assert!(validate_score(1).is_ok());
/// assert!(validate_score(10).is_ok());
/// assert!(validate_score(0).is_err());
/// assert!(validate_score(11).is_err());
/// ```
pub fn validate_score(score: u8) -> Result<(), AniverseError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(AniverseError::validation_field(
            format!("Score must be between {MIN_SCORE} and {MAX_SCORE}"),
            "score",
        ))
    }
}

/// Validate a username's shape
///
/// # Examples
///
/// ```
/// use aniverse_core::validation::validate_username;
///
/// assert!(validate_username("misato_k").is_ok());
/// assert!(validate_username("ab").is_err());
/// assert!(validate_username("has spaces").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<(), AniverseError> {
    if USERNAME_REGEX.is_match(username) {
        Ok(())
    } else {
        Err(AniverseError::validation_field(
            "Invalid username (expected 3-32 letters, digits, or underscores)",
            "username",
        ))
    }
}

/// Check whether a username collides with a reserved name
///
/// The comparison is case-insensitive, so "Admin" and "ADMIN" are both
/// reserved.
pub fn is_reserved_username(username: &str) -> bool {
    RESERVED_USERNAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(username))
}
