use std::sync::Arc;

use thiserror::Error;

use crate::application::dto::{AdminContext, SubmissionDto};
use crate::application::ports::{RepositoryError, SortSpec, SubmissionRepository};

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: list all submissions, most recent first.
pub struct ListSubmissionsUseCase {
    submission_repo: Arc<dyn SubmissionRepository>,
}

impl ListSubmissionsUseCase {
    pub fn new(submission_repo: Arc<dyn SubmissionRepository>) -> Self {
        Self { submission_repo }
    }

    pub async fn execute(&self, ctx: &AdminContext) -> Result<Vec<SubmissionDto>, ListError> {
        let submissions = self
            .submission_repo
            .list_all(SortSpec::SubmittedAtDesc)
            .await?;

        tracing::debug!(admin = %ctx.subject, count = submissions.len(), "Listed submissions");

        Ok(submissions.into_iter().map(SubmissionDto::from).collect())
    }
}
