// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        cart::CartService,
        commands::{
            categories::CategoryCommandService, products::ProductCommandService,
            reviews::ReviewCommandService,
        },
        ports::{cart::CartStore, storage::BlobStore, time::Clock},
        queries::catalog::CatalogQueryService,
        snapshot::CatalogFeed,
        uploads::UploadService,
    },
    domain::{
        category::CategoryRepository, product::ProductRepository, review::ReviewRepository,
    },
};

/// Backing stores the application layer is wired against.
pub struct ServiceDependencies {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub carts: Arc<dyn CartStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub clock: Arc<dyn Clock>,
    pub upload_max_bytes: usize,
}

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub product_commands: Arc<ProductCommandService>,
    pub review_commands: Arc<ReviewCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub catalog_feed: Arc<CatalogFeed>,
    pub carts: Arc<CartService>,
    pub uploads: Arc<UploadService>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            categories,
            products,
            reviews,
            carts,
            blobs,
            clock,
            upload_max_bytes,
        } = deps;

        let catalog_feed = Arc::new(CatalogFeed::new(
            Arc::clone(&categories),
            Arc::clone(&products),
            Arc::clone(&reviews),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&categories),
            Arc::clone(&catalog_feed),
            Arc::clone(&clock),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&products),
            Arc::clone(&categories),
            Arc::clone(&catalog_feed),
            Arc::clone(&clock),
        ));
        let review_commands = Arc::new(ReviewCommandService::new(
            Arc::clone(&reviews),
            Arc::clone(&products),
            Arc::clone(&catalog_feed),
            clock,
        ));

        let catalog_queries = Arc::new(CatalogQueryService::new(
            categories,
            Arc::clone(&products),
            reviews,
        ));
        let carts = Arc::new(CartService::new(carts, products));
        let uploads = Arc::new(UploadService::new(blobs, upload_max_bytes));

        Self {
            category_commands,
            product_commands,
            review_commands,
            catalog_queries,
            catalog_feed,
            carts,
            uploads,
        }
    }
}
