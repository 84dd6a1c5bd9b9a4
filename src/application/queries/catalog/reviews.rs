use super::CatalogQueryService;
use crate::application::{dto::ReviewDto, error::ApplicationResult};
use crate::application::snapshot::STOREFRONT_REVIEW_LIMIT;

pub struct ListReviewsQuery {
    pub limit: u32,
}

impl CatalogQueryService {
    pub async fn list_reviews(&self, query: ListReviewsQuery) -> ApplicationResult<Vec<ReviewDto>> {
        let limit = Self::normalize_review_limit(query.limit);
        let reviews = self.reviews.list_recent(Some(limit)).await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    pub(super) fn normalize_review_limit(limit: u32) -> u32 {
        const MAX_LIMIT: u32 = 50;

        if limit == 0 {
            STOREFRONT_REVIEW_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        }
    }
}
