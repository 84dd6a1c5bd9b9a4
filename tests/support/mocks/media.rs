// tests/support/mocks/media.rs
use async_trait::async_trait;
use bytes::Bytes;
use craftstore::application::{
    ApplicationResult,
    ports::storage::{BlobStore, StoredBlob},
};
use craftstore::domain::media::ImageContentType;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Bytes>>,
}

impl MemoryBlobStore {
    pub fn len(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put_image(
        &self,
        content_type: ImageContentType,
        bytes: Bytes,
    ) -> ApplicationResult<StoredBlob> {
        let key = format!(
            "{}.{}",
            blake3::hash(&bytes).to_hex(),
            content_type.extension()
        );
        let size = bytes.len() as u64;
        self.blobs.lock().unwrap().insert(key.clone(), bytes);
        Ok(StoredBlob {
            url: format!("http://media.test/{key}"),
            key,
            size,
        })
    }
}
