use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::Submission;
use crate::domain::value_objects::Checklist;

/// Pre-authorized caller identity, established by the transport layer and
/// passed into use-case entry points. The core never consults global auth
/// state.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub subject: String,
}

/// DTO for submission listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionDto {
    pub id: String,
    pub full_name: Option<String>,
    pub firm_name: Option<String>,
    pub tax_number: Option<String>,
    pub reference_number: Option<String>,
    pub contact_number: Option<String>,
    pub checklist: Checklist,
    pub verified: bool,
    pub submitted_at: String,
    pub document_key: String,
}

impl From<Submission> for SubmissionDto {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id().to_string(),
            full_name: submission.full_name().map(str::to_string),
            firm_name: submission.firm_name().map(str::to_string),
            tax_number: submission.tax_number().map(str::to_string),
            reference_number: submission.reference_number().map(str::to_string),
            contact_number: submission.contact_number().map(str::to_string),
            checklist: submission.checklist(),
            verified: submission.verified(),
            submitted_at: submission.submitted_at().to_rfc3339(),
            document_key: submission.document_key().to_string(),
        }
    }
}

/// One record skipped during a bulk archive run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkippedSubmission {
    pub id: String,
    pub reason: String,
}

/// Outcome of a bulk archive run. Streaming and result reporting are
/// decoupled: by the time the summary exists, the archive bytes have
/// already been flushed, so the summary travels out-of-band (logs).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub skipped: Vec<SkippedSubmission>,
}

/// DTO returned after generating a single document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedDocumentDto {
    pub key: String,
    pub size_bytes: u64,
}
