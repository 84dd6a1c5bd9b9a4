// src/application/snapshot.rs
use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::{
    application::{
        dto::{CatalogSnapshot, CategoryDto, ProductDto, ReviewDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        category::{CategoryRepository, SortOrder},
        product::ProductRepository,
        review::ReviewRepository,
    },
};

/// Reviews shown on the storefront home page.
pub const STOREFRONT_REVIEW_LIMIT: u32 = 6;

/// Publishes immutable catalog snapshots.
///
/// Subscribers only ever observe whole snapshots. A snapshot is replaced after a write
/// has been confirmed by the repository and the catalog has been fetched again; a failed
/// write or a failed fetch leaves the published snapshot untouched.
pub struct CatalogFeed {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
    reviews: Arc<dyn ReviewRepository>,
    clock: Arc<dyn Clock>,
    sender: watch::Sender<Arc<CatalogSnapshot>>,
    // Serializes fetch-and-publish so an older fetch never overwrites a newer one.
    refresh_lock: Mutex<()>,
}

impl CatalogFeed {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        reviews: Arc<dyn ReviewRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (sender, _) = watch::channel(Arc::new(CatalogSnapshot::empty()));
        Self {
            categories,
            products,
            reviews,
            clock,
            sender,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn current(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<CatalogSnapshot>> {
        self.sender.subscribe()
    }

    /// Fetch the whole catalog and publish it as the next snapshot.
    pub async fn refresh(&self) -> ApplicationResult<Arc<CatalogSnapshot>> {
        let _guard = self.refresh_lock.lock().await;
        let (categories, products, reviews) = tokio::try_join!(
            self.categories.list(SortOrder::Ascending),
            self.products.list_with_category(),
            self.reviews.list_recent(Some(STOREFRONT_REVIEW_LIMIT)),
        )?;

        let version = self.sender.borrow().version + 1;
        let snapshot = Arc::new(CatalogSnapshot {
            version,
            refreshed_at: Some(self.clock.now()),
            categories: categories.into_iter().map(CategoryDto::from).collect(),
            products: products.into_iter().map(ProductDto::from).collect(),
            reviews: reviews.into_iter().map(ReviewDto::from).collect(),
        });

        self.sender.send_replace(Arc::clone(&snapshot));
        tracing::debug!(version, "catalog snapshot replaced");
        Ok(snapshot)
    }

    /// Re-fetch after a confirmed write. The write stands even when the fetch fails, so
    /// the failure is logged and the previous snapshot stays published.
    pub async fn refresh_after_write(&self, operation: &'static str) {
        if let Err(err) = self.refresh().await {
            tracing::warn!(operation, error = %err, "catalog refresh after write failed");
        }
    }
}
