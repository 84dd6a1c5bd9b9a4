use super::CatalogQueryService;
use crate::application::{dto::ProductDto, error::ApplicationResult};

impl CatalogQueryService {
    /// All products, newest first, each with its category name.
    pub async fn list_products(&self) -> ApplicationResult<Vec<ProductDto>> {
        let listings = self.products.list_with_category().await?;
        Ok(listings.into_iter().map(Into::into).collect())
    }
}
