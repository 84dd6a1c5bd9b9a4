// src/domain/product/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::media::ImageUrl;
use crate::domain::product::value_objects::{Price, ProductId, ProductName, Stock};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: String,
    pub price: Price,
    pub stock: Stock,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<ImageUrl>,
    pub images: Vec<ImageUrl>,
    pub created_at: DateTime<Utc>,
}

/// A product joined with the name of its category, as shown on listings.
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub product: Product,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: String,
    pub price: Price,
    pub stock: Stock,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<ImageUrl>,
    pub images: Vec<ImageUrl>,
    pub created_at: DateTime<Utc>,
}

/// Partial product update; `None` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: Option<ProductName>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<Stock>,
    pub category_id: Option<Option<CategoryId>>,
    pub image_url: Option<Option<ImageUrl>>,
    pub images: Option<Vec<ImageUrl>>,
}

impl ProductUpdate {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            price: None,
            stock: None,
            category_id: None,
            image_url: None,
            images: None,
        }
    }

    pub fn with_name(mut self, name: ProductName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<ImageUrl>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_images(mut self, images: Vec<ImageUrl>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
            && self.image_url.is_none()
            && self.images.is_none()
    }

    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
    }
}
