// src/domain/cart.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductId;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartId(Uuid);

impl CartId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::validation("cart id must be a uuid"))
    }

    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CartId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// In-memory shopping cart. There is no checkout; lines only accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
}

impl Cart {
    pub const MAX_QUANTITY: u32 = 99;

    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
        }
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Adds `quantity` units of a product, merging with an existing line for it.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => {
                let merged = line.quantity.saturating_add(quantity);
                if merged > Self::MAX_QUANTITY {
                    return Err(DomainError::validation("quantity must be at most 99"));
                }
                line.quantity = merged;
            }
            None => {
                if quantity > Self::MAX_QUANTITY {
                    return Err(DomainError::validation("quantity must be at most 99"));
                }
                self.lines.push(CartLine {
                    product_id,
                    quantity,
                });
            }
        }
        Ok(())
    }
}
