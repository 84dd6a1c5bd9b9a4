use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub products: u64,
    pub categories: u64,
    pub reviews: u64,
}
