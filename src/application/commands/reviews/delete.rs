// src/application/commands/reviews/delete.rs
use super::ReviewCommandService;
use crate::{
    application::{editor::DeleteOutcome, error::ApplicationResult},
    domain::review::ReviewId,
};

pub struct DeleteReviewCommand {
    pub id: i64,
    pub confirmed: bool,
}

impl ReviewCommandService {
    pub async fn delete_review(
        &self,
        command: DeleteReviewCommand,
    ) -> ApplicationResult<DeleteOutcome> {
        let id = ReviewId::new(command.id)?;
        if !command.confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.repo.delete(id).await?;
        tracing::info!(review_id = id.0, "review deleted");

        self.feed.refresh_after_write("review.delete").await;
        Ok(DeleteOutcome::Deleted)
    }
}
