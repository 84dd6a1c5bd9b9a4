use super::CatalogQueryService;
use crate::application::{dto::DashboardStatsDto, error::ApplicationResult};

impl CatalogQueryService {
    pub async fn dashboard_stats(&self) -> ApplicationResult<DashboardStatsDto> {
        let (products, categories, reviews) = tokio::try_join!(
            self.products.count(),
            self.categories.count(),
            self.reviews.count(),
        )?;

        Ok(DashboardStatsDto {
            products,
            categories,
            reviews,
        })
    }
}
