use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::value_objects::DocumentKey;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for persisted generated documents.
///
/// `put` overwrites silently: regenerating a document for the same key is
/// idempotent and never accumulates versions.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write or overwrite the document at `key`
    async fn put(&self, key: &DocumentKey, bytes: Bytes) -> Result<(), DocumentStoreError>;

    /// Read the document at `key`, or NotFound if no prior put occurred
    async fn get(&self, key: &DocumentKey) -> Result<Bytes, DocumentStoreError>;
}
