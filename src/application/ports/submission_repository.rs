use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::entities::Submission;
use crate::domain::value_objects::SubmissionId;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Ordering applied by the entity store when listing submissions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortSpec {
    /// Most recent first
    #[default]
    SubmittedAtDesc,
}

/// Port for the external submission store. Read-only: submissions are
/// created and owned elsewhere.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// All submissions in the requested order
    async fn list_all(&self, sort: SortSpec) -> Result<Vec<Submission>, RepositoryError>;

    /// Find one submission by ID
    async fn find_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<Submission>, RepositoryError>;
}
