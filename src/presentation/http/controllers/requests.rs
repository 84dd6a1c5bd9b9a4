// src/presentation/http/controllers/requests.rs
use crate::application::dto::CarouselSnapshot;
use crate::domain::{carousel::TransitionOutcome, category::SortOrder};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Keeps "field absent" (`None`) apart from "field sent as null" (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderParam {
    #[default]
    Asc,
    Desc,
}

impl From<OrderParam> for SortOrder {
    fn from(value: OrderParam) -> Self {
        match value {
            OrderParam::Asc => SortOrder::Ascending,
            OrderParam::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct CategoryListParams {
    /// `asc` (default) or `desc` on creation time.
    #[serde(default)]
    pub order: OrderParam,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
    /// Hand-edited slug; omit to derive it from the name (or keep it, when updating).
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal amount, e.g. `24.5`.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i32>,
    /// `null` detaches the product from its category.
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    #[serde(default)]
    pub user_name: String,
    /// Stars from 1 to 5.
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub product_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ReviewListParams {
    /// Maximum number of reviews; `0` or absent means the storefront default.
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ConfirmParams {
    /// Deletes are only carried out when this is `true`.
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    #[serde(default)]
    pub product_id: i64,
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlugPreviewParams {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlugPreviewResponse {
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavigationOutcome {
    Started,
    /// Dropped because a transition was already in flight.
    Busy,
    AlreadyShowing,
    Halted,
}

impl From<TransitionOutcome> for NavigationOutcome {
    fn from(value: TransitionOutcome) -> Self {
        match value {
            TransitionOutcome::Started { .. } => Self::Started,
            TransitionOutcome::Busy => Self::Busy,
            TransitionOutcome::AlreadyShowing => Self::AlreadyShowing,
            TransitionOutcome::Halted => Self::Halted,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HeroNavigationResponse {
    pub outcome: NavigationOutcome,
    pub state: CarouselSnapshot,
}
