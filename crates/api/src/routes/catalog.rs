//! Catalog browse, detail, and admin-append handlers

use crate::routes::require_admin;
use crate::server::AppState;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use aniverse_core::{AniverseError, CatalogItem, CreateCatalogItemRequest, Genre, WatchStatus};
use aniverse_recs::stats::{average_score, score_histogram, HISTOGRAM_BUCKETS};
use aniverse_recs::{filter_catalog, CatalogFilters};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Query parameters for the catalog list
///
/// `genres` is a comma-separated list of display names
/// (`genres=Action,Sci-Fi`); `watch_status` uses the snake_case wire names.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub min_average: Option<f64>,
    pub genres: Option<String>,
    #[serde(default)]
    pub rated_only: bool,
    pub watch_status: Option<String>,
    /// Viewer id for the per-user filters
    pub user_id: Option<Uuid>,
}

impl ListQuery {
    fn into_filters(self) -> Result<(CatalogFilters, Option<Uuid>), AniverseError> {
        let mut genres = Vec::new();
        if let Some(raw) = &self.genres {
            for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let genre = Genre::from_str(name).ok_or_else(|| {
                    AniverseError::validation_field(format!("Unknown genre '{name}'"), "genres")
                })?;
                genres.push(genre);
            }
        }

        let watch_status = match self.watch_status.as_deref() {
            None => None,
            Some("none") => Some(WatchStatus::None),
            Some("want_to_watch") => Some(WatchStatus::WantToWatch),
            Some("watched") => Some(WatchStatus::Watched),
            Some(other) => {
                return Err(AniverseError::validation_field(
                    format!("Unknown watch status '{other}'"),
                    "watch_status",
                ))
            }
        };

        Ok((
            CatalogFilters {
                search: self.search,
                min_average: self.min_average,
                genres,
                rated_only: self.rated_only,
                watch_status,
            },
            self.user_id,
        ))
    }
}

/// Catalog detail payload: the item plus its rating summary
#[derive(Debug, Serialize)]
pub struct CatalogItemDetail {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub average_score: Option<f64>,
    pub rating_count: usize,
    pub histogram: [u64; HISTOGRAM_BUCKETS],
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/catalog")
            .route("", web::get().to(list_catalog))
            .route("", web::post().to(create_item))
            .route("/{id}", web::get().to(get_item)),
    );
}

async fn list_catalog(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AniverseError> {
    let (filters, viewer) = query.into_inner().into_filters()?;
    let snapshot = data.store.snapshot();

    let items = filter_catalog(
        &snapshot.items,
        &snapshot.ratings,
        &snapshot.watchlists,
        viewer,
        &filters,
    );
    Ok(HttpResponse::Ok().json(items))
}

async fn get_item(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AniverseError> {
    let item_id = path.into_inner();
    let snapshot = data.store.snapshot();

    let item = snapshot
        .item(item_id)
        .cloned()
        .ok_or_else(|| AniverseError::not_found("catalog item", item_id))?;

    let item_ratings: Vec<_> = snapshot
        .ratings
        .iter()
        .filter(|r| r.item_id == item_id)
        .copied()
        .collect();

    Ok(HttpResponse::Ok().json(CatalogItemDetail {
        average_score: average_score(&item_ratings, 1),
        rating_count: item_ratings.len(),
        histogram: score_histogram(&item_ratings),
        item,
    }))
}

async fn create_item(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<CreateCatalogItemRequest>,
) -> Result<impl Responder, AniverseError> {
    let admin = require_admin(&req, &data)?;
    let item = data.store.create_item(payload.into_inner())?;

    info!(item_id = %item.id, admin = %admin.username, "catalog item created");
    Ok(HttpResponse::Created().json(item))
}
