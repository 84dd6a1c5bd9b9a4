// src/infrastructure/media/filesystem.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{BlobStore, StoredBlob},
};
use crate::domain::media::ImageContentType;

/// Stores uploads under a media root, named by the blake3 digest of their content.
///
/// Uploading identical bytes twice yields the same key and does not rewrite the file.
#[derive(Clone, Debug)]
pub struct FilesystemBlobStore {
    root: PathBuf,
    public_base: String,
}

impl FilesystemBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_root(&self) -> ApplicationResult<()> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to create media root {}: {err}",
                self.root.display()
            ))
        })
    }

    fn key_for(content_type: ImageContentType, bytes: &[u8]) -> String {
        let digest = blake3::hash(bytes);
        format!("{}.{}", digest.to_hex(), content_type.extension())
    }
}

#[async_trait]
impl BlobStore for FilesystemBlobStore {
    async fn put_image(
        &self,
        content_type: ImageContentType,
        bytes: Bytes,
    ) -> ApplicationResult<StoredBlob> {
        let key = Self::key_for(content_type, &bytes);
        let path = self.root.join(&key);

        let exists = tokio::fs::try_exists(&path).await.unwrap_or(false);
        if !exists {
            self.ensure_root().await?;
            let tmp = self.root.join(format!(".{key}.tmp"));
            tokio::fs::write(&tmp, &bytes).await.map_err(|err| {
                ApplicationError::infrastructure(format!("failed to write upload: {err}"))
            })?;
            tokio::fs::rename(&tmp, &path).await.map_err(|err| {
                ApplicationError::infrastructure(format!("failed to store upload: {err}"))
            })?;
        } else {
            tracing::debug!(%key, "upload already stored");
        }

        Ok(StoredBlob {
            url: format!("{}/{key}", self.public_base),
            key,
            size: bytes.len() as u64,
        })
    }
}
