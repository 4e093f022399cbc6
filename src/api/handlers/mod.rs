pub mod archive;
pub mod documents;
pub mod health;
pub mod submissions;

pub use archive::archive_handler;
pub use documents::{download_document_handler, generate_document_handler};
pub use health::{health_handler, readiness_handler};
pub use submissions::list_handler;
