use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::value_objects::DocumentKey;

/// In-memory document store for tests and ephemeral deployments.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: DashMap<String, Bytes>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn put(&self, key: &DocumentKey, bytes: Bytes) -> Result<(), DocumentStoreError> {
        self.documents.insert(key.to_string(), bytes);
        Ok(())
    }

    async fn get(&self, key: &DocumentKey) -> Result<Bytes, DocumentStoreError> {
        self.documents
            .get(key.as_str())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DocumentStoreError::NotFound(key.to_string()))
    }
}
