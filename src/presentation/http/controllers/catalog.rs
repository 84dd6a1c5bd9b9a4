// src/presentation/http/controllers/catalog.rs
use super::requests::{CategoryListParams, ReviewListParams, ReviewRequest};
use crate::application::{
    commands::reviews::SubmitReviewCommand,
    dto::{CategoryDto, ProductDto, ReviewDto},
    queries::catalog::{GetCategoryBySlugQuery, ListCategoriesQuery, ListReviewsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FormJson;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CategoryListParams),
    responses(
        (status = 200, description = "Categories ordered by creation time.", body = [CategoryDto]),
        (status = 503, description = "Maintenance mode or backend unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Storefront"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CategoryListParams>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .catalog_queries
        .list_categories(ListCategoriesQuery {
            order: params.order.into(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category.", body = CategoryDto),
        (status = 404, description = "No category with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Storefront"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .catalog_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "Products, newest first, with category names.", body = [ProductDto])
    ),
    security([]),
    tag = "Storefront"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .catalog_queries
        .list_products()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    params(ReviewListParams),
    responses(
        (status = 200, description = "Most recent reviews.", body = [ReviewDto])
    ),
    security([]),
    tag = "Storefront"
)]
pub async fn list_reviews(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ReviewListParams>,
) -> HttpResult<Json<Vec<ReviewDto>>> {
    state
        .services
        .catalog_queries
        .list_reviews(ListReviewsQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/reviews",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review stored.", body = ReviewDto),
        (status = 422, description = "Invalid review.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Storefront"
)]
pub async fn submit_review(
    Extension(state): Extension<HttpState>,
    FormJson(payload): FormJson<ReviewRequest>,
) -> HttpResult<(StatusCode, Json<ReviewDto>)> {
    let command = SubmitReviewCommand {
        user_name: payload.user_name,
        rating: payload.rating,
        comment: payload.comment,
        product_id: payload.product_id,
    };

    state
        .services
        .review_commands
        .submit_review(command)
        .await
        .into_http()
        .map(|review| (StatusCode::CREATED, Json(review)))
}
