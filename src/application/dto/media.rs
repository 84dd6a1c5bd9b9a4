use crate::application::ports::storage::StoredBlob;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedImageDto {
    pub url: String,
    pub key: String,
    pub size: u64,
}

impl From<StoredBlob> for UploadedImageDto {
    fn from(blob: StoredBlob) -> Self {
        Self {
            url: blob.url,
            key: blob.key,
            size: blob.size,
        }
    }
}
