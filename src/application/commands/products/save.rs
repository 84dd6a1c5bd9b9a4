// src/application/commands/products/save.rs
use super::ProductCommandService;
use crate::{
    application::{
        dto::ProductDto,
        editor::{EditorMode, FieldErrors},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        errors::DomainResult,
        media::ImageUrl,
        product::{NewProduct, Price, ProductId, ProductName, ProductUpdate, Stock},
    },
};

/// Product editor form. While editing, absent fields keep their stored value; the
/// doubly optional fields distinguish "leave as is" from "clear".
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<Option<i64>>,
    pub image_url: Option<Option<String>>,
    pub images: Option<Vec<String>>,
}

struct ParsedForm {
    name: Option<ProductName>,
    description: Option<String>,
    price: Option<Price>,
    stock: Option<Stock>,
    category_id: Option<Option<CategoryId>>,
    image_url: Option<Option<ImageUrl>>,
    images: Option<Vec<ImageUrl>>,
}

fn parse_images(raw: Vec<String>) -> DomainResult<Vec<ImageUrl>> {
    raw.into_iter()
        .filter(|url| !url.trim().is_empty())
        .map(ImageUrl::new)
        .collect()
}

impl ProductCommandService {
    pub async fn save_product(
        &self,
        mode: EditorMode<ProductId>,
        form: ProductForm,
    ) -> ApplicationResult<ProductDto> {
        let creating = matches!(mode, EditorMode::Creating);
        let parsed = self.parse_form(form, creating).await?;

        let saved = match mode {
            EditorMode::Creating => {
                let (Some(name), Some(price), Some(stock)) =
                    (parsed.name, parsed.price, parsed.stock)
                else {
                    return Err(ApplicationError::validation("product form is incomplete"));
                };
                let created = self
                    .repo
                    .insert(NewProduct {
                        name,
                        description: parsed.description.unwrap_or_default(),
                        price,
                        stock,
                        category_id: parsed.category_id.flatten(),
                        image_url: parsed.image_url.flatten(),
                        images: parsed.images.unwrap_or_default(),
                        created_at: self.clock.now(),
                    })
                    .await?;
                tracing::info!(product_id = created.id.0, "product created");
                created
            }
            EditorMode::Editing { id, .. } => {
                let update = Self::build_update(id, parsed);
                if update.is_empty() {
                    return Err(ApplicationError::validation("no fields to update"));
                }
                let updated = self.repo.update(update).await?;
                tracing::info!(product_id = updated.id.0, "product updated");
                updated
            }
        };

        self.feed.refresh_after_write("product.save").await;
        Ok(saved.into())
    }

    async fn parse_form(&self, form: ProductForm, creating: bool) -> ApplicationResult<ParsedForm> {
        let mut errors = FieldErrors::new();

        let name = match form.name {
            Some(raw) => errors.check("name", ProductName::new(raw)),
            None => {
                if creating {
                    errors.add("name", "Name is required");
                }
                None
            }
        };
        let price = match form.price {
            Some(amount) => errors.check("price", Price::from_decimal(amount)),
            None => {
                if creating {
                    errors.add("price", "Price is required");
                }
                None
            }
        };
        let stock = match form.stock {
            Some(units) => errors.check("stock", Stock::new(units)),
            None => {
                if creating {
                    errors.add("stock", "Stock is required");
                }
                None
            }
        };

        let category_id = match form.category_id {
            Some(Some(raw)) => errors
                .check("category_id", CategoryId::new(raw))
                .map(Some),
            Some(None) => Some(None),
            None => None,
        };
        if let Some(Some(id)) = category_id {
            if self.categories.find_by_id(id).await?.is_none() {
                errors.add("category_id", "category not found");
            }
        }

        let image_url = match form.image_url {
            Some(raw) => errors.check("image_url", ImageUrl::optional(raw)),
            None => None,
        };
        let images = match form.images {
            Some(raw) => errors.check("images", parse_images(raw)),
            None => None,
        };

        errors.finish()?;

        Ok(ParsedForm {
            name,
            description: form.description.map(|d| d.trim().to_string()),
            price,
            stock,
            category_id,
            image_url,
            images,
        })
    }

    fn build_update(id: ProductId, parsed: ParsedForm) -> ProductUpdate {
        let mut update = ProductUpdate::new(id);
        if let Some(name) = parsed.name {
            update = update.with_name(name);
        }
        if let Some(description) = parsed.description {
            update = update.with_description(description);
        }
        if let Some(price) = parsed.price {
            update = update.with_price(price);
        }
        if let Some(stock) = parsed.stock {
            update = update.with_stock(stock);
        }
        if let Some(category_id) = parsed.category_id {
            update = update.with_category(category_id);
        }
        if let Some(image_url) = parsed.image_url {
            update = update.with_image_url(image_url);
        }
        if let Some(images) = parsed.images {
            update = update.with_images(images);
        }
        update
    }
}
