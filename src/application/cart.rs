// src/application/cart.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CartDto,
        editor::FieldErrors,
        error::{ApplicationError, ApplicationResult},
        ports::cart::CartStore,
    },
    domain::{
        cart::{Cart, CartId},
        errors::DomainError,
        product::{ProductId, ProductRepository},
    },
};

pub struct AddToCartCommand {
    pub cart_id: String,
    pub product_id: i64,
    pub quantity: Option<u32>,
}

/// Add-to-cart for the storefront. Carts live only in memory and have no checkout.
pub struct CartService {
    store: Arc<dyn CartStore>,
    products: Arc<dyn ProductRepository>,
}

impl CartService {
    pub fn new(store: Arc<dyn CartStore>, products: Arc<dyn ProductRepository>) -> Self {
        Self { store, products }
    }

    pub async fn create_cart(&self) -> ApplicationResult<CartDto> {
        let cart = self.store.create().await?;
        tracing::debug!(cart_id = %cart.id(), "cart created");
        Ok(cart.into())
    }

    pub async fn get_cart(&self, cart_id: &str) -> ApplicationResult<CartDto> {
        let id = Self::parse_id(cart_id)?;
        self.store
            .get(id)
            .await?
            .map(CartDto::from)
            .ok_or_else(|| ApplicationError::not_found("cart not found"))
    }

    pub async fn add_item(&self, command: AddToCartCommand) -> ApplicationResult<CartDto> {
        let cart_id = Self::parse_id(&command.cart_id)?;

        let mut errors = FieldErrors::new();
        let product_id = errors.check("product_id", ProductId::new(command.product_id));
        if let Some(id) = product_id {
            if self.products.find_by_id(id).await?.is_none() {
                errors.add("product_id", "product not found");
            }
        }
        let quantity = command.quantity.unwrap_or(1);
        if quantity == 0 {
            errors.add("quantity", "quantity must be at least 1");
        } else if quantity > Cart::MAX_QUANTITY {
            errors.add(
                "quantity",
                format!("quantity must be at most {}", Cart::MAX_QUANTITY),
            );
        }
        errors.finish()?;

        let Some(product_id) = product_id else {
            return Err(ApplicationError::validation("product id is required"));
        };

        // The merged quantity can only be checked against the stored line.
        let cart = match self.store.add_item(cart_id, product_id, quantity).await {
            Ok(cart) => cart,
            Err(ApplicationError::Domain(DomainError::Validation(message))) => {
                let mut errors = FieldErrors::new();
                errors.add("quantity", message);
                return Err(ApplicationError::InvalidFields(errors));
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(cart_id = %cart_id, product_id = product_id.0, quantity, "item added to cart");
        Ok(cart.into())
    }

    fn parse_id(raw: &str) -> ApplicationResult<CartId> {
        CartId::parse(raw).map_err(|_| ApplicationError::not_found("cart not found"))
    }
}
