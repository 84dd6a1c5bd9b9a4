// src/application/uploads.rs
use std::sync::Arc;

use bytes::Bytes;

use crate::{
    application::{
        dto::UploadedImageDto,
        editor::FieldErrors,
        error::{ApplicationError, ApplicationResult},
        ports::storage::BlobStore,
    },
    domain::media::ImageContentType,
};

pub struct UploadImageCommand {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

pub struct UploadService {
    store: Arc<dyn BlobStore>,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(store: Arc<dyn BlobStore>, max_bytes: usize) -> Self {
        Self { store, max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub async fn upload_image(&self, command: UploadImageCommand) -> ApplicationResult<UploadedImageDto> {
        let mut errors = FieldErrors::new();
        let content_type = match command.content_type.as_deref() {
            Some(mime) => errors.check("file", ImageContentType::from_mime(mime)),
            None => {
                errors.add("file", "content type is required");
                None
            }
        };
        if command.bytes.is_empty() {
            errors.add("file", "file is empty");
        } else if command.bytes.len() > self.max_bytes {
            errors.add("file", format!("file exceeds {} bytes", self.max_bytes));
        }
        errors.finish()?;

        let Some(content_type) = content_type else {
            return Err(ApplicationError::validation("content type is required"));
        };

        let stored = self.store.put_image(content_type, command.bytes).await?;
        tracing::info!(key = %stored.key, size = stored.size, "image uploaded");
        Ok(stored.into())
    }
}
