//! Rating upsert handler

use crate::routes::require_user;
use crate::server::AppState;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use aniverse_core::AniverseError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub item_id: Uuid,
    /// Integer score in [1,10]
    pub score: u8,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/ratings").route("", web::put().to(upsert_rating)));
}

async fn upsert_rating(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<RateRequest>,
) -> Result<impl Responder, AniverseError> {
    let user = require_user(&req, &data)?;
    let rating = data
        .store
        .upsert_rating(user.id, payload.item_id, payload.score)?;
    Ok(HttpResponse::Ok().json(rating))
}
