use crate::domain::cart::Cart;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLineDto {
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartDto {
    pub id: Uuid,
    pub lines: Vec<CartLineDto>,
    pub total_quantity: u32,
}

impl From<&Cart> for CartDto {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id().as_uuid(),
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineDto {
                    product_id: line.product_id.into(),
                    quantity: line.quantity,
                })
                .collect(),
            total_quantity: cart.total_quantity(),
        }
    }
}

impl From<Cart> for CartDto {
    fn from(cart: Cart) -> Self {
        Self::from(&cart)
    }
}
