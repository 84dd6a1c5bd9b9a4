// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, snapshot::CatalogFeed},
    domain::category::CategoryRepository,
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) feed: Arc<CatalogFeed>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        feed: Arc<CatalogFeed>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repo, feed, clock }
    }
}
