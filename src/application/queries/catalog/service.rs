use std::sync::Arc;

use crate::domain::{
    category::CategoryRepository, product::ProductRepository, review::ReviewRepository,
};

pub struct CatalogQueryService {
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) products: Arc<dyn ProductRepository>,
    pub(super) reviews: Arc<dyn ReviewRepository>,
}

impl CatalogQueryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            categories,
            products,
            reviews,
        }
    }
}
