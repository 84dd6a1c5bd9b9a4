// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::media::ImageUrl;
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub image_url: Option<ImageUrl>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub image_url: Option<ImageUrl>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the editable category fields, keyed by id.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub image_url: Option<ImageUrl>,
}

impl CategoryUpdate {
    pub fn apply_to(&self, category: &mut Category) {
        category.name = self.name.clone();
        category.slug = self.slug.clone();
        category.image_url = self.image_url.clone();
    }
}
