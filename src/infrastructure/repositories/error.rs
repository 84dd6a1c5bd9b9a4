use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_PRODUCT_CATEGORY: &str = "products_category_id_fkey";
const CNT_REVIEW_PRODUCT: &str = "reviews_product_id_fkey";
const CNT_REVIEW_RATING: &str = "reviews_rating_check";
const CNT_PRODUCT_PRICE: &str = "products_price_cents_check";
const CNT_PRODUCT_STOCK: &str = "products_stock_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_PRODUCT_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_REVIEW_PRODUCT => DomainError::NotFound("product not found".into()),
                    CNT_REVIEW_RATING => {
                        DomainError::Validation("rating must be between 1 and 5".into())
                    }
                    CNT_PRODUCT_PRICE => DomainError::Validation("price cannot be negative".into()),
                    CNT_PRODUCT_STOCK => DomainError::Validation("stock cannot be negative".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => DomainError::Unavailable(err.to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
