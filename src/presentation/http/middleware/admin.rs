// src/presentation/http/middleware/admin.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Guards `/api/v1/admin`. Without a configured token the console is open.
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let Some(expected) = state.settings.admin_token.clone() else {
        return next.run(req).await;
    };

    match req.headers().typed_get::<Authorization<Bearer>>() {
        Some(header) if expected.matches(header.token()) => next.run(req).await,
        Some(_) => {
            tracing::warn!(path = %req.uri().path(), "admin request with invalid token");
            HttpError::from_error(ApplicationError::unauthorized("invalid admin token"))
                .into_response()
        }
        None => HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response(),
    }
}
