// src/infrastructure/repositories/postgres_review.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductId;
use crate::domain::review::{
    NewReview, Rating, Review, ReviewComment, ReviewId, ReviewListing, ReviewRepository,
    ReviewerName,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: i64,
    user_name: String,
    rating: i16,
    comment: String,
    product_id: Option<i64>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ReviewListingRow {
    #[sqlx(flatten)]
    review: ReviewRow,
    product_name: Option<String>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId::new(row.id)?,
            user_name: ReviewerName::new(row.user_name)?,
            rating: Rating::new(i32::from(row.rating))?,
            comment: ReviewComment::new(row.comment)?,
            product_id: row.product_id.map(ProductId::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn list_recent(&self, limit: Option<u32>) -> DomainResult<Vec<ReviewListing>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT r.id, r.user_name, r.rating, r.comment, r.product_id, r.created_at,
                    p.name AS product_name
             FROM reviews r
             LEFT JOIN products p ON p.id = r.product_id
             ORDER BY r.created_at DESC, r.id DESC",
        );
        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }

        let rows = builder
            .build_query_as::<ReviewListingRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(ReviewListing {
                    review: Review::try_from(row.review)?,
                    product_name: row.product_name,
                })
            })
            .collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let NewReview {
            user_name,
            rating,
            comment,
            product_id,
            created_at,
        } = review;

        let row = sqlx::query_as::<_, ReviewRow>(
            "INSERT INTO reviews (user_name, rating, comment, product_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_name, rating, comment, product_id, created_at",
        )
        .bind(user_name.as_str())
        .bind(i16::from(rating.stars()))
        .bind(comment.as_str())
        .bind(product_id.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Review::try_from(row)
    }

    async fn delete(&self, id: ReviewId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("review not found"));
        }
        Ok(())
    }
}
