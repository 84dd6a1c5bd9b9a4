// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, carts, catalog, hero, storefront},
    middleware::{require_admin, storefront_gate},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

fn storefront_routes() -> Router {
    Router::new()
        .route("/api/v1/storefront", get(storefront::get_storefront))
        .route("/api/v1/categories", get(catalog::list_categories))
        .route("/api/v1/categories/{slug}", get(catalog::get_category_by_slug))
        .route("/api/v1/products", get(catalog::list_products))
        .route(
            "/api/v1/reviews",
            get(catalog::list_reviews).post(catalog::submit_review),
        )
        .route("/api/v1/hero", get(hero::get_hero))
        .route("/api/v1/hero/next", post(hero::next_slide))
        .route("/api/v1/hero/prev", post(hero::prev_slide))
        .route("/api/v1/hero/slides/{index}", post(hero::go_to_slide))
        .route("/api/v1/carts", post(carts::create_cart))
        .route("/api/v1/carts/{id}", get(carts::get_cart))
        .route("/api/v1/carts/{id}/items", post(carts::add_cart_item))
        .route_layer(middleware::from_fn(storefront_gate))
}

fn admin_routes(upload_max_bytes: usize) -> Router {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/categories", post(admin::create_category))
        .route(
            "/categories/{id}",
            put(admin::update_category).delete(admin::delete_category),
        )
        .route("/products", post(admin::create_product))
        .route(
            "/products/{id}",
            put(admin::update_product).delete(admin::delete_product),
        )
        .route("/reviews/{id}", delete(admin::delete_review))
        .route(
            "/uploads",
            post(admin::upload_image).layer(DefaultBodyLimit::max(upload_max_bytes)),
        )
        .route("/slugs/preview", get(admin::preview_slug))
        .route_layer(middleware::from_fn(require_admin))
}

pub fn build_router(state: HttpState) -> Router {
    let settings = std::sync::Arc::clone(&state.settings);

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(storefront_routes())
        .nest("/api/v1/admin", admin_routes(settings.upload_max_bytes));

    if let Some(root) = &settings.media_root {
        router = router.nest_service("/media", ServeDir::new(root));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
