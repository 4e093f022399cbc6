use std::sync::Arc;

use thiserror::Error;

use crate::application::dto::{AdminContext, GeneratedDocumentDto};
use crate::application::ports::{
    DocumentStore, DocumentStoreError, RepositoryError, SubmissionRepository,
};
use crate::domain::value_objects::SubmissionId;
use crate::infrastructure::pdf::{TemplateError, TemplateOverlay};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Submission not found: {0}")]
    NotFound(String),

    #[error("Master template unavailable")]
    TemplateUnavailable,

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Document store error: {0}")]
    Store(#[from] DocumentStoreError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: stamp the master template for one submission and persist the
/// result under the submission's document key. Regeneration overwrites.
pub struct GenerateDocumentUseCase {
    submission_repo: Arc<dyn SubmissionRepository>,
    document_store: Arc<dyn DocumentStore>,
    overlay: Option<Arc<TemplateOverlay>>,
}

impl GenerateDocumentUseCase {
    pub fn new(
        submission_repo: Arc<dyn SubmissionRepository>,
        document_store: Arc<dyn DocumentStore>,
        overlay: Option<Arc<TemplateOverlay>>,
    ) -> Self {
        Self {
            submission_repo,
            document_store,
            overlay,
        }
    }

    pub async fn execute(
        &self,
        id: &SubmissionId,
        ctx: &AdminContext,
    ) -> Result<GeneratedDocumentDto, GenerateError> {
        // The overlay is absent only when template load failed at startup;
        // the bulk path stays available regardless.
        let overlay = self
            .overlay
            .as_ref()
            .ok_or(GenerateError::TemplateUnavailable)?;

        let record = self
            .submission_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| GenerateError::NotFound(id.to_string()))?;

        let document = overlay.stamp(&record)?;
        let key = record.document_key();
        let size_bytes = document.bytes.len() as u64;

        self.document_store.put(&key, document.bytes).await?;

        tracing::info!(
            admin = %ctx.subject,
            submission_id = %id,
            key = %key,
            size_bytes,
            "Generated document stored"
        );

        Ok(GeneratedDocumentDto {
            key: key.to_string(),
            size_bytes,
        })
    }
}
