//! Registration and login handlers

use crate::server::AppState;
use actix_web::{web, HttpResponse, Responder};
use aniverse_core::AniverseError;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login)),
    );
}

async fn register(
    data: web::Data<AppState>,
    payload: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AniverseError> {
    let user = data
        .store
        .register_user(&payload.username, &payload.password)?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(HttpResponse::Created().json(user))
}

async fn login(
    data: web::Data<AppState>,
    payload: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AniverseError> {
    let user = data.store.login(&payload.username, &payload.password)?;
    Ok(HttpResponse::Ok().json(user))
}
