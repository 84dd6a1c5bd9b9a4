// src/presentation/http/controllers/admin.rs
use super::delete_response;
use super::requests::{
    CategoryRequest, ConfirmParams, ProductRequest, SlugPreviewParams, SlugPreviewResponse,
};
use crate::application::{
    commands::{
        categories::{CategoryForm, DeleteCategoryCommand},
        products::{DeleteProductCommand, ProductForm},
        reviews::DeleteReviewCommand,
    },
    dto::{CategoryDto, DashboardStatsDto, ProductDto, UploadedImageDto},
    editor::EditorMode,
    error::ApplicationError,
    uploads::UploadImageCommand,
};
use crate::domain::{product::ProductId, slug::normalize_slug};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FormJson;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header},
    response::Response,
};
use bytes::Bytes;

impl From<CategoryRequest> for CategoryForm {
    fn from(value: CategoryRequest) -> Self {
        Self {
            name: value.name,
            slug: value.slug,
            image_url: value.image_url,
        }
    }
}

impl From<ProductRequest> for ProductForm {
    fn from(value: ProductRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            price: value.price,
            stock: value.stock,
            category_id: value.category_id,
            image_url: value.image_url,
            images: value.images,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Row counts per collection.", body = DashboardStatsDto),
        (status = 401, description = "Missing or invalid admin token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .catalog_queries
        .dashboard_stats()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    FormJson(payload): FormJson<CategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    state
        .services
        .category_commands
        .save_category(EditorMode::Creating, payload.into())
        .await
        .into_http()
        .map(|category| (StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    FormJson(payload): FormJson<CategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let commands = &state.services.category_commands;
    let mode = commands.open_editor(id).await.into_http()?;
    commands
        .save_category(mode, payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier"), ConfirmParams),
    responses(
        (status = 200, description = "Category deleted.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 204, description = "Not confirmed; nothing deleted."),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<ConfirmParams>,
) -> HttpResult<Response> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand {
            id,
            confirmed: params.confirm,
        })
        .await
        .into_http()
        .map(delete_response)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 422, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    FormJson(payload): FormJson<ProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    state
        .services
        .product_commands
        .save_product(EditorMode::Creating, payload.into())
        .await
        .into_http()
        .map(|product| (StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated.", body = ProductDto),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid fields.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    FormJson(payload): FormJson<ProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let id = ProductId::new(id)
        .map_err(ApplicationError::from)
        .into_http()?;
    state
        .services
        .product_commands
        .save_product(EditorMode::editing(id), payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i64, Path, description = "Product identifier"), ConfirmParams),
    responses(
        (status = 200, description = "Product deleted.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 204, description = "Not confirmed; nothing deleted."),
        (status = 404, description = "Product not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<ConfirmParams>,
) -> HttpResult<Response> {
    state
        .services
        .product_commands
        .delete_product(DeleteProductCommand {
            id,
            confirmed: params.confirm,
        })
        .await
        .into_http()
        .map(delete_response)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/reviews/{id}",
    params(("id" = i64, Path, description = "Review identifier"), ConfirmParams),
    responses(
        (status = 200, description = "Review deleted.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 204, description = "Not confirmed; nothing deleted."),
        (status = 404, description = "Review not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_review(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<ConfirmParams>,
) -> HttpResult<Response> {
    state
        .services
        .review_commands
        .delete_review(DeleteReviewCommand {
            id,
            confirmed: params.confirm,
        })
        .await
        .into_http()
        .map(delete_response)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/uploads",
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "image/*"),
    responses(
        (status = 201, description = "Image stored.", body = UploadedImageDto),
        (status = 413, description = "Body exceeds the upload limit."),
        (status = 422, description = "Empty body or unsupported image type.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResult<(StatusCode, Json<UploadedImageDto>)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state
        .services
        .uploads
        .upload_image(UploadImageCommand {
            content_type,
            bytes: body,
        })
        .await
        .into_http()
        .map(|uploaded| (StatusCode::CREATED, Json(uploaded)))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/slugs/preview",
    params(SlugPreviewParams),
    responses((status = 200, description = "Slug derived from the title.", body = SlugPreviewResponse)),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn preview_slug(Query(params): Query<SlugPreviewParams>) -> Json<SlugPreviewResponse> {
    let slug = normalize_slug(&params.title);
    Json(SlugPreviewResponse {
        title: params.title,
        slug,
    })
}
