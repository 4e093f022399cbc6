mod checklist;
mod document_key;
mod submission_id;

pub use checklist::Checklist;
pub use document_key::DocumentKey;
pub use submission_id::SubmissionId;
