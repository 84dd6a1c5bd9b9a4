// src/domain/carousel/slide.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleVariant {
    Charcoal,
    Gold,
    Noir,
}

impl StyleVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Charcoal => "charcoal",
            Self::Gold => "gold",
            Self::Noir => "noir",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub style_variant: StyleVariant,
}

/// Fixed, ordered, non-empty sequence of hero slides.
#[derive(Debug, Clone)]
pub struct SlideDeck(Arc<[Slide]>);

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> DomainResult<Self> {
        if slides.is_empty() {
            return Err(DomainError::Validation(
                "a slide deck needs at least one slide".into(),
            ));
        }
        Ok(Self(slides.into()))
    }

    pub fn storefront() -> Self {
        Self(Arc::from(vec![
            Slide {
                id: 1,
                title: "Handcrafted with Love".into(),
                subtitle: "Discover unique artisan pieces that bring warmth and character to every corner of your home.".into(),
                cta_label: "Shop Collection".into(),
                style_variant: StyleVariant::Charcoal,
            },
            Slide {
                id: 2,
                title: "New Arrivals".into(),
                subtitle: "Explore our latest collection of premium handmade crafts, designed to inspire and delight.".into(),
                cta_label: "View New Items".into(),
                style_variant: StyleVariant::Gold,
            },
            Slide {
                id: 3,
                title: "Premium Quality".into(),
                subtitle: "Each piece is carefully crafted by skilled artisans using traditional techniques and quality materials.".into(),
                cta_label: "Learn More".into(),
                style_variant: StyleVariant::Noir,
            },
        ]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.0.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_fails_fast() {
        assert!(SlideDeck::new(vec![]).is_err());
    }

    #[test]
    fn storefront_deck_has_three_slides() {
        let deck = SlideDeck::storefront();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(1).map(|s| s.cta_label.as_str()), Some("View New Items"));
    }
}
