// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::media::ImageContentType;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// Storage key, stable for identical content.
    pub key: String,
    /// Public URL the storefront can embed directly.
    pub url: String,
    pub size: u64,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put_image(
        &self,
        content_type: ImageContentType,
        bytes: Bytes,
    ) -> ApplicationResult<StoredBlob>;
}
