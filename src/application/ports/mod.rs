mod document_store;
mod submission_repository;

pub use document_store::{DocumentStore, DocumentStoreError};
pub use submission_repository::{RepositoryError, SortSpec, SubmissionRepository};

#[cfg(test)]
pub use document_store::MockDocumentStore;
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
