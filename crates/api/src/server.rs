//! HTTP server wiring for the Aniverse API

use crate::routes;
use crate::store::JsonStore;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use aniverse_core::ServiceConfig;
use aniverse_recs::Recommender;
use tracing::info;

/// Shared application state
pub struct AppState {
    pub store: JsonStore,
    pub recommender: Recommender,
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "aniverse-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Register all routes on the application
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1")
            .configure(routes::auth::configure)
            .configure(routes::catalog::configure)
            .configure(routes::ratings::configure)
            .configure(routes::watchlist::configure)
            .configure(routes::users::configure)
            .route("/data", web::get().to(routes::users::get_data)),
    );
}

/// Run the HTTP server until shutdown
pub async fn run(config: ServiceConfig, state: AppState) -> std::io::Result<()> {
    let state = web::Data::new(state);

    info!("Starting Aniverse API on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure_app)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
