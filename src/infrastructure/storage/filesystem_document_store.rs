use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::value_objects::DocumentKey;

/// Filesystem-backed document store.
///
/// Writes go to a temp file first and are renamed into place, so a reader
/// never observes a half-written document and regeneration overwrites
/// atomically.
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the storage directory
    pub async fn init(&self) -> Result<(), DocumentStoreError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    fn document_path(&self, key: &DocumentKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    fn temp_path(&self) -> PathBuf {
        self.root.join(format!(".tmp-{}", Uuid::new_v4()))
    }
}

#[async_trait]
impl DocumentStore for FilesystemDocumentStore {
    async fn put(&self, key: &DocumentKey, bytes: Bytes) -> Result<(), DocumentStoreError> {
        let temp_path = self.temp_path();
        debug!(key = %key, temp = ?temp_path, "Writing document to temp file");

        if let Err(e) = fs::write(&temp_path, &bytes).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(DocumentStoreError::Io(e));
        }

        let final_path = self.document_path(key);
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(DocumentStoreError::Io(e));
        }

        debug!(key = %key, path = ?final_path, size = bytes.len(), "Document stored");
        Ok(())
    }

    async fn get(&self, key: &DocumentKey) -> Result<Bytes, DocumentStoreError> {
        let path = self.document_path(key);

        let bytes = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocumentStoreError::NotFound(key.to_string())
            } else {
                DocumentStoreError::Io(e)
            }
        })?;

        Ok(Bytes::from(bytes))
    }
}
