use crate::domain::category::Category;
use crate::domain::product::{Product, ProductListing};
use crate::domain::review::ReviewListing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            image_url: category.image_url.map(|url| url.into_inner()),
            created_at: category.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    /// Display price with two decimals, e.g. `"24.50"`.
    pub price: String,
    pub stock: i32,
    pub in_stock: bool,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductDto {
    fn build(product: Product, category_name: Option<String>) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            description: product.description,
            price_cents: product.price.cents(),
            price: product.price.to_string(),
            stock: product.stock.units(),
            in_stock: product.stock.in_stock(),
            category_id: product.category_id.map(Into::into),
            category_name,
            image_url: product.image_url.map(|url| url.into_inner()),
            images: product.images.into_iter().map(|url| url.into_inner()).collect(),
            created_at: product.created_at,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self::build(product, None)
    }
}

impl From<ProductListing> for ProductDto {
    fn from(listing: ProductListing) -> Self {
        Self::build(listing.product, listing.category_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i64,
    pub user_name: String,
    /// Avatar letter for the reviewer.
    pub initial: String,
    pub rating: u8,
    pub comment: String,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewListing> for ReviewDto {
    fn from(listing: ReviewListing) -> Self {
        let review = listing.review;
        Self {
            id: review.id.into(),
            initial: review.user_name.initial(),
            user_name: review.user_name.into_inner(),
            rating: review.rating.stars(),
            comment: review.comment.into_inner(),
            product_id: review.product_id.map(Into::into),
            product_name: listing.product_name,
            created_at: review.created_at,
        }
    }
}

/// Immutable view of the storefront catalog, replaced wholesale after each confirmed write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogSnapshot {
    pub version: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub categories: Vec<CategoryDto>,
    pub products: Vec<ProductDto>,
    pub reviews: Vec<ReviewDto>,
}

impl CatalogSnapshot {
    pub fn empty() -> Self {
        Self {
            version: 0,
            refreshed_at: None,
            categories: Vec::new(),
            products: Vec::new(),
            reviews: Vec::new(),
        }
    }
}
