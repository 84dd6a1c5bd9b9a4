// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod carts;
pub mod catalog;
pub mod hero;
pub mod requests;
pub mod storefront;

use crate::application::editor::DeleteOutcome;
use crate::presentation::http::openapi::StatusResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A declined confirmation answers 204 with no body; nothing was deleted.
pub(crate) fn delete_response(outcome: DeleteOutcome) -> Response {
    match outcome {
        DeleteOutcome::Deleted => Json(StatusResponse {
            status: "deleted".into(),
        })
        .into_response(),
        DeleteOutcome::Cancelled => StatusCode::NO_CONTENT.into_response(),
    }
}
