// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{admin, carts, catalog, hero, requests, storefront};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::env;
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        storefront::get_storefront,
        catalog::list_categories,
        catalog::get_category_by_slug,
        catalog::list_products,
        catalog::list_reviews,
        catalog::submit_review,
        hero::get_hero,
        hero::next_slide,
        hero::prev_slide,
        hero::go_to_slide,
        carts::create_cart,
        carts::get_cart,
        carts::add_cart_item,
        admin::dashboard,
        admin::create_category,
        admin::update_category,
        admin::delete_category,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        admin::delete_review,
        admin::upload_image,
        admin::preview_slug
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            requests::OrderParam,
            requests::CategoryRequest,
            requests::ProductRequest,
            requests::ReviewRequest,
            requests::AddToCartRequest,
            requests::SlugPreviewResponse,
            requests::NavigationOutcome,
            requests::HeroNavigationResponse,
            crate::application::dto::CatalogSnapshot,
            crate::application::dto::CategoryDto,
            crate::application::dto::ProductDto,
            crate::application::dto::ReviewDto,
            crate::application::dto::DashboardStatsDto,
            crate::application::dto::UploadedImageDto,
            crate::application::dto::CartDto,
            crate::application::dto::CartLineDto,
            crate::application::dto::SlideDto,
            crate::application::dto::CarouselSnapshot,
            crate::application::dto::HeroDto
        )
    ),
    tags(
        (name = "Storefront", description = "Public catalog endpoints"),
        (name = "Hero", description = "Hero carousel state and navigation"),
        (name = "Cart", description = "In-memory shopping carts"),
        (name = "Admin", description = "Catalog administration"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Craftstore API",
        description = "Storefront backend for a handmade-crafts shop",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        if let Ok(url) = env::var("PUBLIC_API_URL") {
            let sanitized = url.trim().trim_end_matches('/').to_string();
            if !sanitized.is_empty() {
                openapi.servers = Some(vec![Server::new(sanitized)]);
            }
        }
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
