// src/application/commands/reviews/submit.rs
use super::ReviewCommandService;
use crate::{
    application::{
        dto::ReviewDto,
        editor::FieldErrors,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        product::ProductId,
        review::{NewReview, Rating, ReviewComment, ReviewListing, ReviewerName},
    },
};

pub struct SubmitReviewCommand {
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub product_id: Option<i64>,
}

impl ReviewCommandService {
    pub async fn submit_review(&self, command: SubmitReviewCommand) -> ApplicationResult<ReviewDto> {
        let mut errors = FieldErrors::new();
        let user_name = errors.check("user_name", ReviewerName::new(command.user_name));
        let rating = errors.check("rating", Rating::new(command.rating));
        let comment = errors.check("comment", ReviewComment::new(command.comment));

        let mut product = None;
        if let Some(raw) = command.product_id {
            if let Some(id) = errors.check("product_id", ProductId::new(raw)) {
                match self.products.find_by_id(id).await? {
                    Some(found) => product = Some(found),
                    None => errors.add("product_id", "product not found"),
                }
            }
        }
        errors.finish()?;

        let (Some(user_name), Some(rating), Some(comment)) = (user_name, rating, comment) else {
            return Err(ApplicationError::validation("review form is incomplete"));
        };

        let review = self
            .repo
            .insert(NewReview {
                user_name,
                rating,
                comment,
                product_id: product.as_ref().map(|p| p.id),
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(review_id = review.id.0, rating = review.rating.stars(), "review submitted");

        self.feed.refresh_after_write("review.submit").await;
        Ok(ReviewListing {
            review,
            product_name: product.map(|p| p.name.into_inner()),
        }
        .into())
    }
}
