#![allow(dead_code)]

use std::io::Read;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use submission_docs::application::ports::{
    RepositoryError, SortSpec, SubmissionRepository,
};
use submission_docs::domain::entities::Submission;
use submission_docs::domain::value_objects::{Checklist, SubmissionId};

/// Test-side builder for submissions
pub struct SubmissionBuilder {
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

impl SubmissionBuilder {
    pub fn new() -> Self {
        Self {
            id: SubmissionId::new(),
            full_name: Some("Asha Verma".to_string()),
            firm_name: Some("Verma Traders".to_string()),
            tax_number: Some("29ABCDE1234F1Z5".to_string()),
            reference_number: Some("REF-042".to_string()),
            contact_number: Some("+91 98765 43210".to_string()),
            checklist: Checklist::new(true, true),
            verified: true,
            submitted_at: Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    pub fn full_name(mut self, value: Option<&str>) -> Self {
        self.full_name = value.map(str::to_string);
        self
    }

    pub fn firm_name(mut self, value: Option<&str>) -> Self {
        self.firm_name = value.map(str::to_string);
        self
    }

    pub fn tax_number(mut self, value: Option<&str>) -> Self {
        self.tax_number = value.map(str::to_string);
        self
    }

    pub fn reference_number(mut self, value: Option<&str>) -> Self {
        self.reference_number = value.map(str::to_string);
        self
    }

    pub fn contact_number(mut self, value: Option<&str>) -> Self {
        self.contact_number = value.map(str::to_string);
        self
    }

    pub fn checklist(mut self, cheque: bool, letterhead: bool) -> Self {
        self.checklist = Checklist::new(cheque, letterhead);
        self
    }

    pub fn verified(mut self, value: bool) -> Self {
        self.verified = value;
        self
    }

    pub fn submitted_at(mut self, value: DateTime<Utc>) -> Self {
        self.submitted_at = value;
        self
    }

    pub fn build(self) -> Submission {
        Submission::reconstruct(
            self.id,
            self.full_name,
            self.firm_name,
            self.tax_number,
            self.reference_number,
            self.contact_number,
            self.checklist,
            self.verified,
            self.submitted_at,
        )
    }
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Repository stub over a fixed record set, already in listing order
pub struct StubSubmissionRepository {
    submissions: Vec<Submission>,
}

impl StubSubmissionRepository {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self { submissions }
    }
}

#[async_trait]
impl SubmissionRepository for StubSubmissionRepository {
    async fn list_all(&self, _sort: SortSpec) -> Result<Vec<Submission>, RepositoryError> {
        Ok(self.submissions.clone())
    }

    async fn find_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<Submission>, RepositoryError> {
        Ok(self
            .submissions
            .iter()
            .find(|submission| submission.id() == id)
            .cloned())
    }
}

/// Extract (name, bytes) pairs from a ZIP archive, in directory order
pub fn extract_entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut file = archive.by_index(index).unwrap();
        let mut content = Vec::new();
        file.read_to_end(&mut content).unwrap();
        entries.push((file.name().to_string(), content));
    }
    entries
}

/// Decode the text show operations of a PDF's first page, in order
pub fn pdf_text_lines(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let content = doc.get_and_decode_page_content(page_id).unwrap();

    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| String::from_utf8(op.operands[0].as_str().unwrap().to_vec()).unwrap())
        .collect()
}

/// Build a one-page master template for overlay tests
pub fn minimal_template() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 18.into()]),
            Operation::new("Td", vec![100.into(), 740.into()]),
            Operation::new("Tj", vec![Object::string_literal("Registration Certificate")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
