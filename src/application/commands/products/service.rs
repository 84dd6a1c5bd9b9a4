// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, snapshot::CatalogFeed},
    domain::{category::CategoryRepository, product::ProductRepository},
};

pub struct ProductCommandService {
    pub(super) repo: Arc<dyn ProductRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) feed: Arc<CatalogFeed>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProductCommandService {
    pub fn new(
        repo: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        feed: Arc<CatalogFeed>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            categories,
            feed,
            clock,
        }
    }
}
