// src/application/ports/cart.rs
use crate::application::ApplicationResult;
use crate::domain::cart::{Cart, CartId};
use crate::domain::product::ProductId;
use async_trait::async_trait;

#[async_trait]
pub trait CartStore: Send + Sync {
    async fn create(&self) -> ApplicationResult<Cart>;
    async fn get(&self, id: CartId) -> ApplicationResult<Option<Cart>>;
    /// Add a line to the cart atomically with respect to other writers of the same cart.
    async fn add_item(
        &self,
        id: CartId,
        product_id: ProductId,
        quantity: u32,
    ) -> ApplicationResult<Cart>;
}
