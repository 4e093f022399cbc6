use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Checklist, DocumentKey, SubmissionId};

/// One onboarding submission, read from the entity store.
///
/// Submissions are owned by the store; this type is an immutable snapshot.
/// All text fields except the identifier are optional and render as a
/// placeholder in generated documents when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    id: SubmissionId,
    full_name: Option<String>,
    firm_name: Option<String>,
    tax_number: Option<String>,
    reference_number: Option<String>,
    contact_number: Option<String>,
    checklist: Checklist,
    verified: bool,
    submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Reconstruct from storage (e.g., database)
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: SubmissionId,
        full_name: Option<String>,
        firm_name: Option<String>,
        tax_number: Option<String>,
        reference_number: Option<String>,
        contact_number: Option<String>,
        checklist: Checklist,
        verified: bool,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name,
            firm_name,
            tax_number,
            reference_number,
            contact_number,
            checklist,
            verified,
            submitted_at,
        }
    }

    /// Placeholder used in archive entry names when the display name is absent
    pub const UNNAMED: &'static str = "submission";

    /// Key under which this submission's generated document is stored
    pub fn document_key(&self) -> DocumentKey {
        DocumentKey::derive(self.tax_number())
    }

    /// Archive entry name: `<displayNameOrPlaceholder>-<id>.pdf`. The ID
    /// suffix keeps names unique across a batch.
    pub fn archive_entry_name(&self) -> String {
        format!(
            "{}-{}.pdf",
            self.full_name.as_deref().unwrap_or(Self::UNNAMED),
            self.id
        )
    }

    // Getters
    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn firm_name(&self) -> Option<&str> {
        self.firm_name.as_deref()
    }

    pub fn tax_number(&self) -> Option<&str> {
        self.tax_number.as_deref()
    }

    pub fn reference_number(&self) -> Option<&str> {
        self.reference_number.as_deref()
    }

    pub fn contact_number(&self) -> Option<&str> {
        self.contact_number.as_deref()
    }

    pub fn checklist(&self) -> Checklist {
        self.checklist
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
