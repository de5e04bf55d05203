//! Per-user recommendation and profile handlers

use crate::server::AppState;
use actix_web::{web, HttpResponse, Responder};
use aniverse_core::AniverseError;
use aniverse_recs::user_profile;
use uuid::Uuid;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("/{id}/recommendations", web::get().to(get_recommendations))
            .route("/{id}/profile", web::get().to(get_profile)),
    );
}

async fn get_recommendations(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AniverseError> {
    let user_id = path.into_inner();
    data.store
        .find_user(user_id)
        .ok_or_else(|| AniverseError::not_found("user", user_id))?;

    let snapshot = data.store.snapshot();
    let recommendations = data.recommender.recommend(
        user_id,
        &snapshot.users,
        &snapshot.ratings,
        &snapshot.items,
    );
    Ok(HttpResponse::Ok().json(recommendations))
}

async fn get_profile(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AniverseError> {
    let user_id = path.into_inner();
    data.store
        .find_user(user_id)
        .ok_or_else(|| AniverseError::not_found("user", user_id))?;

    let snapshot = data.store.snapshot();
    let stats = user_profile(user_id, &snapshot.ratings, &snapshot.items);
    Ok(HttpResponse::Ok().json(stats))
}

/// Full snapshot for app bootstrap, credentials stripped
pub async fn get_data(data: web::Data<AppState>) -> Result<impl Responder, AniverseError> {
    let mut snapshot = data.store.snapshot();
    for user in &mut snapshot.users {
        user.password = None;
    }
    Ok(HttpResponse::Ok().json(snapshot))
}
