mod categories;
mod dashboard;
mod products;
mod reviews;
mod service;

pub use categories::{GetCategoryBySlugQuery, ListCategoriesQuery};
pub use reviews::ListReviewsQuery;
pub use service::CatalogQueryService;
