// src/application/commands/categories/save.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        editor::{EditorMode, FieldErrors},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryName, CategoryUpdate, NewCategory},
        media::ImageUrl,
        slug::Slug,
    },
};

/// Category editor form as submitted.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
    /// Hand-edited slug. Blank or absent means "use whatever the slug field holds".
    pub slug: Option<String>,
    pub image_url: Option<String>,
}

impl CategoryCommandService {
    /// Put the editor into editing mode for a stored category.
    pub async fn open_editor(&self, id: i64) -> ApplicationResult<EditorMode<CategoryId, Slug>> {
        let id = CategoryId::new(id)?;
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        Ok(EditorMode::Editing {
            id,
            original: category.slug,
        })
    }

    pub async fn save_category(
        &self,
        mode: EditorMode<CategoryId, Slug>,
        form: CategoryForm,
    ) -> ApplicationResult<CategoryDto> {
        let mut slug_field = mode.slug_field();
        slug_field.title_changed(&form.name);
        if let Some(manual) = form.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            slug_field.edit(manual);
        }

        let mut errors = FieldErrors::new();
        let name = errors.check("name", CategoryName::new(form.name));
        let slug = errors.check("slug", slug_field.into_slug());
        let image_url = errors.check("image_url", ImageUrl::optional(form.image_url));
        errors.finish()?;

        let (Some(name), Some(slug), Some(image_url)) = (name, slug, image_url) else {
            return Err(ApplicationError::validation("category form is incomplete"));
        };

        let saved = match mode {
            EditorMode::Creating => {
                let created = self
                    .repo
                    .insert(NewCategory {
                        name,
                        slug,
                        image_url,
                        created_at: self.clock.now(),
                    })
                    .await?;
                tracing::info!(category_id = created.id.0, slug = %created.slug, "category created");
                created
            }
            EditorMode::Editing { id, .. } => {
                let updated = self
                    .repo
                    .update(CategoryUpdate {
                        id,
                        name,
                        slug,
                        image_url,
                    })
                    .await?;
                tracing::info!(category_id = updated.id.0, slug = %updated.slug, "category updated");
                updated
            }
        };

        self.feed.refresh_after_write("category.save").await;
        Ok(saved.into())
    }
}
