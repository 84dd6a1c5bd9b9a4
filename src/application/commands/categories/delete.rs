// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::{editor::DeleteOutcome, error::ApplicationResult},
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
    pub confirmed: bool,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<DeleteOutcome> {
        let id = CategoryId::new(command.id)?;
        if !command.confirmed {
            tracing::debug!(category_id = id.0, "category delete not confirmed");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.repo.delete(id).await?;
        tracing::info!(category_id = id.0, "category deleted");

        self.feed.refresh_after_write("category.delete").await;
        Ok(DeleteOutcome::Deleted)
    }
}
