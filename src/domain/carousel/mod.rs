pub mod slide;
pub mod state;

pub use slide::{Slide, SlideDeck, StyleVariant};
pub use state::{CarouselState, Phase, TransitionOutcome};
