// src/presentation/http/controllers/storefront.rs
use crate::application::dto::CatalogSnapshot;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/storefront",
    responses(
        (status = 200, description = "Current catalog snapshot.", body = CatalogSnapshot),
        (status = 503, description = "Maintenance mode or backend unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Storefront"
)]
pub async fn get_storefront(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<CatalogSnapshot>> {
    let feed = &state.services.catalog_feed;
    let mut snapshot = feed.current();
    // Nothing has been published yet; load the first snapshot on demand.
    if snapshot.version == 0 {
        snapshot = feed.refresh().await.into_http()?;
    }
    Ok(Json(CatalogSnapshot::clone(&snapshot)))
}
