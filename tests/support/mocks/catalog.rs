// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use craftstore::domain::{
    category::{
        Category, CategoryId, CategoryName, CategoryRepository, CategoryUpdate, NewCategory,
        SortOrder,
    },
    errors::{DomainError, DomainResult},
    product::{
        NewProduct, Price, Product, ProductId, ProductListing, ProductName, ProductRepository,
        ProductUpdate, Stock,
    },
    review::{
        NewReview, Rating, Review, ReviewComment, ReviewId, ReviewListing, ReviewRepository,
        ReviewerName,
    },
    slug::Slug,
};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use super::time::fixed_now;

#[derive(Default)]
struct Tables {
    next_id: i64,
    categories: Vec<Category>,
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// One in-memory store standing in for all three catalog tables, so joins and
/// `ON DELETE SET NULL` behave like the database.
#[derive(Default)]
pub struct MemoryCatalog {
    tables: Mutex<Tables>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

fn outage() -> DomainError {
    DomainError::Unavailable("connection refused".into())
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent read fails as if the database were down.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Every subsequent write fails as if the database were down.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_read(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(outage())
        } else {
            Ok(())
        }
    }

    fn check_write(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(outage())
        } else {
            Ok(())
        }
    }

    pub fn seed_category(&self, name: &str, slug: &str) -> Category {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.allocate_id();
        let category = Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            slug: Slug::new(slug).unwrap(),
            image_url: None,
            created_at: fixed_now() - chrono::Duration::days(30) + chrono::Duration::seconds(id),
        };
        tables.categories.push(category.clone());
        category
    }

    pub fn seed_product(&self, name: &str, cents: i64, category: Option<CategoryId>) -> Product {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.allocate_id();
        let product = Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            description: String::new(),
            price: Price::from_cents(cents).unwrap(),
            stock: Stock::new(5).unwrap(),
            category_id: category,
            image_url: None,
            images: Vec::new(),
            created_at: fixed_now() - chrono::Duration::days(30) + chrono::Duration::seconds(id),
        };
        tables.products.push(product.clone());
        product
    }

    pub fn seed_review(&self, user: &str, stars: i32, product: Option<ProductId>) -> Review {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.allocate_id();
        let review = Review {
            id: ReviewId::new(id).unwrap(),
            user_name: ReviewerName::new(user).unwrap(),
            rating: Rating::new(stars).unwrap(),
            comment: ReviewComment::new("Lovely work").unwrap(),
            product_id: product,
            created_at: fixed_now() - chrono::Duration::days(30) + chrono::Duration::seconds(id),
        };
        tables.reviews.push(review.clone());
        review
    }

    pub fn category_count(&self) -> usize {
        self.tables.lock().unwrap().categories.len()
    }

    pub fn product_count(&self) -> usize {
        self.tables.lock().unwrap().products.len()
    }

    pub fn review_count(&self) -> usize {
        self.tables.lock().unwrap().reviews.len()
    }

    pub fn category(&self, id: i64) -> Option<Category> {
        self.tables
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|c| c.id.0 == id)
            .cloned()
    }

    pub fn product(&self, id: i64) -> Option<Product> {
        self.tables
            .lock()
            .unwrap()
            .products
            .iter()
            .find(|p| p.id.0 == id)
            .cloned()
    }
}

#[async_trait]
impl CategoryRepository for MemoryCatalog {
    async fn list(&self, order: SortOrder) -> DomainResult<Vec<Category>> {
        self.check_read()?;
        let mut categories = self.tables.lock().unwrap().categories.clone();
        categories.sort_by_key(|c| (c.created_at, c.id.0));
        if order == SortOrder::Descending {
            categories.reverse();
        }
        Ok(categories)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.check_read()?;
        Ok(self.category(id.0))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        self.check_read()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn count(&self) -> DomainResult<u64> {
        self.check_read()?;
        Ok(self.category_count() as u64)
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = tables.allocate_id();
        let created = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            slug: category.slug,
            image_url: category.image_url,
            created_at: category.created_at,
        };
        tables.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        if tables
            .categories
            .iter()
            .any(|c| c.slug == update.slug && c.id != update.id)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let category = tables
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::not_found("category not found"))?;
        update.apply_to(category);
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(DomainError::not_found("category not found"));
        }
        for product in &mut tables.products {
            if product.category_id == Some(id) {
                product.category_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryCatalog {
    async fn list_with_category(&self) -> DomainResult<Vec<ProductListing>> {
        self.check_read()?;
        let tables = self.tables.lock().unwrap();
        let mut listings: Vec<ProductListing> = tables
            .products
            .iter()
            .map(|product| ProductListing {
                product: product.clone(),
                category_name: product.category_id.and_then(|id| {
                    tables
                        .categories
                        .iter()
                        .find(|c| c.id == id)
                        .map(|c| c.name.as_str().to_string())
                }),
            })
            .collect();
        listings.sort_by_key(|l| std::cmp::Reverse((l.product.created_at, l.product.id.0)));
        Ok(listings)
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        self.check_read()?;
        Ok(self.product(id.0))
    }

    async fn count(&self) -> DomainResult<u64> {
        self.check_read()?;
        Ok(self.product_count() as u64)
    }

    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        if let Some(category_id) = product.category_id {
            if !tables.categories.iter().any(|c| c.id == category_id) {
                return Err(DomainError::not_found("category not found"));
            }
        }
        let id = tables.allocate_id();
        let created = Product {
            id: ProductId::new(id)?,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
            image_url: product.image_url,
            images: product.images,
            created_at: product.created_at,
        };
        tables.products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        let product = tables
            .products
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::not_found("product not found"))?;
        update.apply_to(product);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Err(DomainError::not_found("product not found"));
        }
        for review in &mut tables.reviews {
            if review.product_id == Some(id) {
                review.product_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for MemoryCatalog {
    async fn list_recent(&self, limit: Option<u32>) -> DomainResult<Vec<ReviewListing>> {
        self.check_read()?;
        let tables = self.tables.lock().unwrap();
        let mut listings: Vec<ReviewListing> = tables
            .reviews
            .iter()
            .map(|review| ReviewListing {
                review: review.clone(),
                product_name: review.product_id.and_then(|id| {
                    tables
                        .products
                        .iter()
                        .find(|p| p.id == id)
                        .map(|p| p.name.as_str().to_string())
                }),
            })
            .collect();
        listings.sort_by_key(|l| std::cmp::Reverse((l.review.created_at, l.review.id.0)));
        if let Some(limit) = limit {
            listings.truncate(limit as usize);
        }
        Ok(listings)
    }

    async fn count(&self) -> DomainResult<u64> {
        self.check_read()?;
        Ok(self.review_count() as u64)
    }

    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        let id = tables.allocate_id();
        let created = Review {
            id: ReviewId::new(id)?,
            user_name: review.user_name,
            rating: review.rating,
            comment: review.comment,
            product_id: review.product_id,
            created_at: review.created_at,
        };
        tables.reviews.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: ReviewId) -> DomainResult<()> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.reviews.len();
        tables.reviews.retain(|r| r.id != id);
        if tables.reviews.len() == before {
            return Err(DomainError::not_found("review not found"));
        }
        Ok(())
    }
}
