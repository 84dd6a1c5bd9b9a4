use crate::domain::carousel::{CarouselState, Slide};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlideDto {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub style_variant: String,
}

impl From<&Slide> for SlideDto {
    fn from(slide: &Slide) -> Self {
        Self {
            id: slide.id,
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            cta_label: slide.cta_label.clone(),
            style_variant: slide.style_variant.as_str().to_string(),
        }
    }
}

/// Observable carousel position published on every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub transitioning: bool,
    pub slide_count: usize,
}

impl From<&CarouselState> for CarouselSnapshot {
    fn from(state: &CarouselState) -> Self {
        Self {
            current_index: state.current_index(),
            transitioning: state.transitioning(),
            slide_count: state.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroDto {
    pub slides: Vec<SlideDto>,
    pub current_index: usize,
    pub transitioning: bool,
    pub current: SlideDto,
}
