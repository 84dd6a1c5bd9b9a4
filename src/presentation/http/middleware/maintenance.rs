// src/presentation/http/middleware/maintenance.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Answers every public storefront request with 503 while maintenance mode is on.
pub async fn storefront_gate(req: Request<Body>, next: Next) -> Response {
    let maintenance = req
        .extensions()
        .get::<HttpState>()
        .is_some_and(|state| state.settings.maintenance_mode);

    if maintenance {
        return HttpError::from_error(ApplicationError::unavailable(
            "the store is down for maintenance",
        ))
        .into_response();
    }
    next.run(req).await
}
