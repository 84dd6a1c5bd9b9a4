// src/domain/review/entity.rs
use crate::domain::product::ProductId;
use crate::domain::review::value_objects::{Rating, ReviewComment, ReviewId, ReviewerName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub user_name: ReviewerName,
    pub rating: Rating,
    pub comment: ReviewComment,
    pub product_id: Option<ProductId>,
    pub created_at: DateTime<Utc>,
}

/// A review joined with the name of the reviewed product.
#[derive(Debug, Clone)]
pub struct ReviewListing {
    pub review: Review,
    pub product_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_name: ReviewerName,
    pub rating: Rating,
    pub comment: ReviewComment,
    pub product_id: Option<ProductId>,
    pub created_at: DateTime<Utc>,
}
