// src/presentation/http/controllers/hero.rs
use super::requests::HeroNavigationResponse;
use crate::application::dto::HeroDto;
use crate::domain::carousel::TransitionOutcome;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

fn navigation(state: &HttpState, outcome: TransitionOutcome) -> Json<HeroNavigationResponse> {
    Json(HeroNavigationResponse {
        outcome: outcome.into(),
        state: state.hero.snapshot(),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/hero",
    responses((status = 200, description = "Hero slides and carousel position.", body = HeroDto)),
    security([]),
    tag = "Hero"
)]
pub async fn get_hero(Extension(state): Extension<HttpState>) -> Json<HeroDto> {
    Json(state.hero.hero())
}

#[utoipa::path(
    post,
    path = "/api/v1/hero/next",
    responses((status = 200, description = "Navigation result; dropped while a transition runs.", body = HeroNavigationResponse)),
    security([]),
    tag = "Hero"
)]
pub async fn next_slide(Extension(state): Extension<HttpState>) -> Json<HeroNavigationResponse> {
    let outcome = state.hero.next();
    navigation(&state, outcome)
}

#[utoipa::path(
    post,
    path = "/api/v1/hero/prev",
    responses((status = 200, description = "Navigation result; dropped while a transition runs.", body = HeroNavigationResponse)),
    security([]),
    tag = "Hero"
)]
pub async fn prev_slide(Extension(state): Extension<HttpState>) -> Json<HeroNavigationResponse> {
    let outcome = state.hero.prev();
    navigation(&state, outcome)
}

#[utoipa::path(
    post,
    path = "/api/v1/hero/slides/{index}",
    params(("index" = usize, Path, description = "Slide position; wraps around the deck")),
    responses((status = 200, description = "Navigation result.", body = HeroNavigationResponse)),
    security([]),
    tag = "Hero"
)]
pub async fn go_to_slide(
    Extension(state): Extension<HttpState>,
    Path(index): Path<usize>,
) -> Json<HeroNavigationResponse> {
    let outcome = state.hero.go_to(index);
    navigation(&state, outcome)
}
