use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;

use crate::application::dto::AdminContext;
use crate::application::ports::{
    DocumentStore, DocumentStoreError, RepositoryError, SubmissionRepository,
};
use crate::domain::value_objects::{DocumentKey, SubmissionId};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Submission not found: {0}")]
    SubmissionNotFound(String),

    #[error("No generated document for key: {0}")]
    DocumentNotFound(String),

    #[error("Document store error: {0}")]
    Store(DocumentStoreError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: retrieve the persisted document for a submission.
///
/// The key is re-derived from the record, so retrieval always agrees with
/// the derivation used at generation time.
pub struct FetchDocumentUseCase {
    submission_repo: Arc<dyn SubmissionRepository>,
    document_store: Arc<dyn DocumentStore>,
}

impl FetchDocumentUseCase {
    pub fn new(
        submission_repo: Arc<dyn SubmissionRepository>,
        document_store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            submission_repo,
            document_store,
        }
    }

    pub async fn execute(
        &self,
        id: &SubmissionId,
        ctx: &AdminContext,
    ) -> Result<(DocumentKey, Bytes), FetchError> {
        let record = self
            .submission_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| FetchError::SubmissionNotFound(id.to_string()))?;

        let key = record.document_key();
        let bytes = match self.document_store.get(&key).await {
            Ok(bytes) => bytes,
            Err(DocumentStoreError::NotFound(_)) => {
                return Err(FetchError::DocumentNotFound(key.to_string()))
            }
            Err(e) => return Err(FetchError::Store(e)),
        };

        tracing::debug!(
            admin = %ctx.subject,
            submission_id = %id,
            key = %key,
            size_bytes = bytes.len(),
            "Serving stored document"
        );

        Ok((key, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockDocumentStore, MockSubmissionRepository};
    use crate::domain::entities::Submission;
    use crate::domain::value_objects::Checklist;
    use chrono::Utc;

    fn record(id: SubmissionId, tax_number: Option<&str>) -> Submission {
        Submission::reconstruct(
            id,
            Some("Asha Verma".to_string()),
            None,
            tax_number.map(str::to_string),
            None,
            None,
            Checklist::default(),
            false,
            Utc::now(),
        )
    }

    fn ctx() -> AdminContext {
        AdminContext {
            subject: "test-admin".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_stored_bytes() {
        let id = SubmissionId::new();
        let mut repo = MockSubmissionRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(record(id, Some("GST1")))));

        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .withf(|key| key.as_str() == "GST1")
            .times(1)
            .returning(|_| Ok(Bytes::from_static(b"stored pdf")));

        let use_case = FetchDocumentUseCase::new(Arc::new(repo), Arc::new(store));
        let (key, bytes) = use_case.execute(&id, &ctx()).await.unwrap();

        assert_eq!(key.as_str(), "GST1");
        assert_eq!(bytes, Bytes::from_static(b"stored pdf"));
    }

    #[tokio::test]
    async fn test_fetch_unknown_submission() {
        let mut repo = MockSubmissionRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        let store = MockDocumentStore::new();

        let use_case = FetchDocumentUseCase::new(Arc::new(repo), Arc::new(store));
        let result = use_case.execute(&SubmissionId::new(), &ctx()).await;

        assert!(matches!(result, Err(FetchError::SubmissionNotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_before_generate_is_document_not_found() {
        let id = SubmissionId::new();
        let mut repo = MockSubmissionRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(record(id, Some("GST1")))));

        let mut store = MockDocumentStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|key| Err(DocumentStoreError::NotFound(key.to_string())));

        let use_case = FetchDocumentUseCase::new(Arc::new(repo), Arc::new(store));
        let result = use_case.execute(&id, &ctx()).await;

        assert!(matches!(result, Err(FetchError::DocumentNotFound(_))));
    }
}
