// src/presentation/http/controllers/carts.rs
use super::requests::AddToCartRequest;
use crate::application::{cart::AddToCartCommand, dto::CartDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FormJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/carts",
    responses((status = 201, description = "Empty cart created.", body = CartDto)),
    security([]),
    tag = "Cart"
)]
pub async fn create_cart(
    Extension(state): Extension<HttpState>,
) -> HttpResult<(StatusCode, Json<CartDto>)> {
    state
        .services
        .carts
        .create_cart()
        .await
        .into_http()
        .map(|cart| (StatusCode::CREATED, Json(cart)))
}

#[utoipa::path(
    get,
    path = "/api/v1/carts/{id}",
    params(("id" = String, Path, description = "Cart id (uuid)")),
    responses(
        (status = 200, description = "Cart contents.", body = CartDto),
        (status = 404, description = "Unknown cart.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Cart"
)]
pub async fn get_cart(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<CartDto>> {
    state.services.carts.get_cart(&id).await.into_http().map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/carts/{id}/items",
    params(("id" = String, Path, description = "Cart id (uuid)")),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Updated cart.", body = CartDto),
        (status = 404, description = "Unknown cart.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Unknown product or bad quantity.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Cart"
)]
pub async fn add_cart_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    FormJson(payload): FormJson<AddToCartRequest>,
) -> HttpResult<Json<CartDto>> {
    let command = AddToCartCommand {
        cart_id: id,
        product_id: payload.product_id,
        quantity: payload.quantity,
    };
    state
        .services
        .carts
        .add_item(command)
        .await
        .into_http()
        .map(Json)
}
