mod bulk_archive;
mod fetch_document;
mod generate_document;
mod list_submissions;

pub use bulk_archive::{
    stream_archive, BulkArchiveError, BulkArchiveUseCase, PipelineError, ARCHIVE_FILE_NAME,
};
pub use fetch_document::{FetchDocumentUseCase, FetchError};
pub use generate_document::{GenerateDocumentUseCase, GenerateError};
pub use list_submissions::{ListError, ListSubmissionsUseCase};
