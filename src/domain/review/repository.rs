use crate::domain::errors::DomainResult;
use crate::domain::review::entity::{NewReview, Review, ReviewListing};
use crate::domain::review::value_objects::ReviewId;
use async_trait::async_trait;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Reviews joined with their product name, newest first, at most `limit` when given.
    async fn list_recent(&self, limit: Option<u32>) -> DomainResult<Vec<ReviewListing>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn insert(&self, review: NewReview) -> DomainResult<Review>;
    async fn delete(&self, id: ReviewId) -> DomainResult<()>;
}
