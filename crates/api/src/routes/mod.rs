//! Route handlers for the Aniverse API

pub mod auth;
pub mod catalog;
pub mod ratings;
pub mod users;
pub mod watchlist;

use crate::server::AppState;
use actix_web::{web, HttpRequest};
use aniverse_core::AniverseError;
use uuid::Uuid;

/// Resolve the acting user from the `X-User-Id` header
///
/// Session handling proper is out of scope; callers identify themselves by
/// id and the boundary checks the account exists.
pub(crate) fn require_user(
    req: &HttpRequest,
    data: &web::Data<AppState>,
) -> Result<aniverse_core::User, AniverseError> {
    let raw = req
        .headers()
        .get("X-User-Id")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AniverseError::Unauthorized("Missing X-User-Id header".to_string()))?;

    let user_id = Uuid::parse_str(raw)
        .map_err(|_| AniverseError::Unauthorized("Malformed X-User-Id header".to_string()))?;

    data.store
        .find_user(user_id)
        .ok_or_else(|| AniverseError::Unauthorized("Unknown user".to_string()))
}

/// Resolve the acting user and require the administrative flag
pub(crate) fn require_admin(
    req: &HttpRequest,
    data: &web::Data<AppState>,
) -> Result<aniverse_core::User, AniverseError> {
    let user = require_user(req, data)?;
    if !user.is_admin {
        return Err(AniverseError::Forbidden("Admin access required".to_string()));
    }
    Ok(user)
}
