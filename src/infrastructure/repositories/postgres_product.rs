// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::ImageUrl;
use crate::domain::product::{
    NewProduct, Price, Product, ProductId, ProductListing, ProductName, ProductRepository,
    ProductUpdate, Stock,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PRODUCT_COLUMNS: &str =
    "id, name, description, price_cents, stock, category_id, image_url, images, created_at";

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price_cents: i64,
    stock: i32,
    category_id: Option<i64>,
    image_url: Option<String>,
    images: Vec<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ProductListingRow {
    #[sqlx(flatten)]
    product: ProductRow,
    category_name: Option<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            name: ProductName::new(row.name)?,
            description: row.description,
            price: Price::from_cents(row.price_cents)?,
            stock: Stock::new(row.stock)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            image_url: ImageUrl::optional(row.image_url)?,
            images: row
                .images
                .into_iter()
                .map(ImageUrl::new)
                .collect::<DomainResult<_>>()?,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<ProductListingRow> for ProductListing {
    type Error = DomainError;

    fn try_from(row: ProductListingRow) -> Result<Self, Self::Error> {
        Ok(ProductListing {
            product: Product::try_from(row.product)?,
            category_name: row.category_name,
        })
    }
}

fn image_strings(images: Vec<ImageUrl>) -> Vec<String> {
    images.into_iter().map(ImageUrl::into_inner).collect()
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list_with_category(&self) -> DomainResult<Vec<ProductListing>> {
        let rows = sqlx::query_as::<_, ProductListingRow>(
            "SELECT p.id, p.name, p.description, p.price_cents, p.stock, p.category_id,
                    p.image_url, p.images, p.created_at, c.name AS category_name
             FROM products p
             LEFT JOIN categories c ON c.id = p.category_id
             ORDER BY p.created_at DESC, p.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ProductListing::try_from).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .map(Product::try_from)
            .transpose()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let NewProduct {
            name,
            description,
            price,
            stock,
            category_id,
            image_url,
            images,
            created_at,
        } = product;

        let sql = format!(
            "INSERT INTO products (name, description, price_cents, stock, category_id, image_url, images, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(name.as_str())
            .bind(description)
            .bind(price.cents())
            .bind(stock.units())
            .bind(category_id.map(i64::from))
            .bind(image_url.map(ImageUrl::into_inner))
            .bind(image_strings(images))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        if update.is_empty() {
            return Err(DomainError::validation("no fields to update"));
        }

        let ProductUpdate {
            id,
            name,
            description,
            price,
            stock,
            category_id,
            image_url,
            images,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE products SET ");
        let mut fields = builder.separated(", ");

        if let Some(name) = name {
            fields.push("name = ");
            fields.push_bind_unseparated(name.into_inner());
        }
        if let Some(description) = description {
            fields.push("description = ");
            fields.push_bind_unseparated(description);
        }
        if let Some(price) = price {
            fields.push("price_cents = ");
            fields.push_bind_unseparated(price.cents());
        }
        if let Some(stock) = stock {
            fields.push("stock = ");
            fields.push_bind_unseparated(stock.units());
        }
        if let Some(category_id) = category_id {
            fields.push("category_id = ");
            fields.push_bind_unseparated(category_id.map(i64::from));
        }
        if let Some(image_url) = image_url {
            fields.push("image_url = ");
            fields.push_bind_unseparated(image_url.map(ImageUrl::into_inner));
        }
        if let Some(images) = images {
            fields.push("images = ");
            fields.push_bind_unseparated(image_strings(images));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        let row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("product not found"))?;

        Product::try_from(row)
    }

    async fn delete(&self, id: ProductId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("product not found"));
        }
        Ok(())
    }
}
