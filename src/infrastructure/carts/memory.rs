// src/infrastructure/carts/memory.rs
use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use tokio::{sync::RwLock, time::Instant};

use crate::application::{ApplicationResult, error::ApplicationError, ports::cart::CartStore};
use crate::domain::cart::{Cart, CartId};
use crate::domain::product::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLimits {
    pub idle_ttl: Duration,
    pub max_carts: usize,
}

impl Default for CartLimits {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(24 * 60 * 60),
            max_carts: 10_000,
        }
    }
}

struct Entry {
    cart: Cart,
    touched: Instant,
}

/// Process-local cart storage. Carts are lost on restart.
///
/// Every read or write touches a cart. Carts idle for longer than the TTL are treated as
/// gone and swept out on the next create; when the store is full the least recently
/// touched cart makes room for the new one.
#[derive(Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<CartId, Entry>>,
    limits: CartLimits,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: CartLimits) -> Self {
        Self {
            carts: RwLock::default(),
            limits,
        }
    }

    fn is_stale(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.touched) >= self.limits.idle_ttl
    }

    fn live_entry<'a>(
        &self,
        carts: &'a mut HashMap<CartId, Entry>,
        id: CartId,
        now: Instant,
    ) -> Option<&'a mut Entry> {
        if carts.get(&id).is_some_and(|entry| self.is_stale(entry, now)) {
            carts.remove(&id);
            tracing::debug!(cart_id = %id, "idle cart expired");
            return None;
        }
        let entry = carts.get_mut(&id)?;
        entry.touched = now;
        Some(entry)
    }

    fn make_room(&self, carts: &mut HashMap<CartId, Entry>, now: Instant) {
        let before = carts.len();
        carts.retain(|_, entry| !self.is_stale(entry, now));
        let expired = before - carts.len();
        if expired > 0 {
            tracing::debug!(expired, "swept idle carts");
        }

        while carts.len() >= self.limits.max_carts {
            let Some(oldest) = carts
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| *id)
            else {
                break;
            };
            carts.remove(&oldest);
            tracing::warn!(cart_id = %oldest, "cart store full; evicted least recently used cart");
        }
    }

    pub async fn cart_count(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn create(&self) -> ApplicationResult<Cart> {
        let now = Instant::now();
        let cart = Cart::new(CartId::generate());
        let mut carts = self.carts.write().await;
        self.make_room(&mut carts, now);
        carts.insert(
            cart.id(),
            Entry {
                cart: cart.clone(),
                touched: now,
            },
        );
        Ok(cart)
    }

    async fn get(&self, id: CartId) -> ApplicationResult<Option<Cart>> {
        let mut carts = self.carts.write().await;
        Ok(self
            .live_entry(&mut carts, id, Instant::now())
            .map(|entry| entry.cart.clone()))
    }

    async fn add_item(
        &self,
        id: CartId,
        product_id: ProductId,
        quantity: u32,
    ) -> ApplicationResult<Cart> {
        let mut carts = self.carts.write().await;
        let entry = self
            .live_entry(&mut carts, id, Instant::now())
            .ok_or_else(|| ApplicationError::not_found("cart not found"))?;
        entry.cart.add(product_id, quantity)?;
        Ok(entry.cart.clone())
    }
}
