use super::CatalogQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::SortOrder, slug::Slug},
};

pub struct ListCategoriesQuery {
    pub order: SortOrder,
}

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CatalogQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list(query.order).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        // A malformed slug can never match a stored one.
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        self.categories
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
