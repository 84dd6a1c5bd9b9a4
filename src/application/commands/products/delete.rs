// src/application/commands/products/delete.rs
use super::ProductCommandService;
use crate::{
    application::{editor::DeleteOutcome, error::ApplicationResult},
    domain::product::ProductId,
};

pub struct DeleteProductCommand {
    pub id: i64,
    pub confirmed: bool,
}

impl ProductCommandService {
    pub async fn delete_product(
        &self,
        command: DeleteProductCommand,
    ) -> ApplicationResult<DeleteOutcome> {
        let id = ProductId::new(command.id)?;
        if !command.confirmed {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.repo.delete(id).await?;
        tracing::info!(product_id = id.0, "product deleted");

        self.feed.refresh_after_write("product.delete").await;
        Ok(DeleteOutcome::Deleted)
    }
}
