//! Watchlist status handler

use crate::routes::require_user;
use crate::server::AppState;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use aniverse_core::{AniverseError, WatchStatus};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct WatchStatusRequest {
    pub item_id: Uuid,
    /// Setting `none` removes the entry
    pub status: WatchStatus,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/watchlist").route("", web::put().to(set_watch_status)));
}

async fn set_watch_status(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<WatchStatusRequest>,
) -> Result<impl Responder, AniverseError> {
    let user = require_user(&req, &data)?;
    let entry = data
        .store
        .set_watch_status(user.id, payload.item_id, payload.status)?;
    Ok(HttpResponse::Ok().json(entry))
}
