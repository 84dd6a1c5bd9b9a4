// src/application/commands/reviews/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, snapshot::CatalogFeed},
    domain::{product::ProductRepository, review::ReviewRepository},
};

pub struct ReviewCommandService {
    pub(super) repo: Arc<dyn ReviewRepository>,
    pub(super) products: Arc<dyn ProductRepository>,
    pub(super) feed: Arc<CatalogFeed>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ReviewCommandService {
    pub fn new(
        repo: Arc<dyn ReviewRepository>,
        products: Arc<dyn ProductRepository>,
        feed: Arc<CatalogFeed>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            products,
            feed,
            clock,
        }
    }
}
