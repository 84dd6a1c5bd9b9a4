use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductListing, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products joined with their category name, newest first.
    async fn list_with_category(&self) -> DomainResult<Vec<ProductListing>>;
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    async fn delete(&self, id: ProductId) -> DomainResult<()>;
}
