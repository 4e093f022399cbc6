use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use thiserror::Error;

use crate::domain::entities::Submission;
use crate::infrastructure::pdf::{ComposedDocument, MISSING_FIELD};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF encoding error: {0}")]
    Encoding(#[from] lopdf::Error),

    #[error("Render failed: {0}")]
    Failed(String),
}

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_LEFT: i64 = 72;
const TITLE_BASELINE: i64 = 760;
const TITLE_SIZE: i64 = 16;
const BODY_SIZE: i64 = 12;
const LINE_STEP: i64 = 18;

/// Renders one submission into a single-page PDF.
///
/// Pure function of the record: same record, same bytes. Field order is
/// fixed; absent optional fields render the placeholder token.
pub struct DocumentComposer;

impl DocumentComposer {
    pub fn compose(record: &Submission) -> Result<ComposedDocument, RenderError> {
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
            operations: Self::operations(record),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

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
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    PAGE_WIDTH.into(),
                    PAGE_HEIGHT.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| RenderError::Failed(e.to_string()))?;

        Ok(ComposedDocument {
            file_name: record.archive_entry_name(),
            bytes: Bytes::from(bytes),
        })
    }

    /// Body lines in contract order. Exposed to the composer only; the
    /// order here is what the tests pin down.
    fn body_lines(record: &Submission) -> Vec<String> {
        let field = |value: Option<&str>| value.unwrap_or(MISSING_FIELD).to_string();
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };

        let mut lines = vec![
            format!("Name: {}", field(record.full_name())),
            format!("Firm Name: {}", field(record.firm_name())),
            format!("Tax Number: {}", field(record.tax_number())),
            format!("Reference Number: {}", field(record.reference_number())),
            format!("Contact Number: {}", field(record.contact_number())),
            format!("Verified: {}", yes_no(record.verified())),
            "Checklist:".to_string(),
        ];
        for (label, checked) in record.checklist().items() {
            lines.push(format!("- {}: {}", label, yes_no(checked)));
        }
        lines.push(format!(
            "Submitted At: {}",
            record.submitted_at().format("%d/%m/%Y %H:%M:%S UTC")
        ));

        lines
    }

    fn operations(record: &Submission) -> Vec<Operation> {
        let lines = Self::body_lines(record);

        let mut ops = Vec::with_capacity(lines.len() * 2 + 6);
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec!["F1".into(), TITLE_SIZE.into()]));
        ops.push(Operation::new(
            "Td",
            vec![MARGIN_LEFT.into(), TITLE_BASELINE.into()],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal("Submission Report")],
        ));
        ops.push(Operation::new("Tf", vec!["F1".into(), BODY_SIZE.into()]));
        for (index, line) in lines.iter().enumerate() {
            let step = if index == 0 { -28 } else { -LINE_STEP };
            ops.push(Operation::new("Td", vec![0.into(), step.into()]));
            ops.push(Operation::new(
                "Tj",
                vec![Object::string_literal(line.as_str())],
            ));
        }
        ops.push(Operation::new("ET", vec![]));

        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Checklist, SubmissionId};
    use chrono::{TimeZone, Utc};

    fn full_record() -> Submission {
        Submission::reconstruct(
            SubmissionId::new(),
            Some("Asha Verma".to_string()),
            Some("Verma Traders".to_string()),
            Some("29ABCDE1234F1Z5".to_string()),
            Some("REF-042".to_string()),
            Some("+91 98765 43210".to_string()),
            Checklist::new(true, false),
            true,
            Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap(),
        )
    }

    fn extract_text_lines(bytes: &[u8]) -> Vec<String> {
        let doc = Document::load_mem(bytes).unwrap();
        let page_id = *doc.get_pages().values().next().unwrap();
        let content = doc.get_and_decode_page_content(page_id).unwrap();

        content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .map(|op| {
                String::from_utf8(op.operands[0].as_str().unwrap().to_vec()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_compose_field_order_is_fixed() {
        let record = full_record();
        let document = DocumentComposer::compose(&record).unwrap();

        let lines = extract_text_lines(&document.bytes);
        assert_eq!(
            lines,
            vec![
                "Submission Report",
                "Name: Asha Verma",
                "Firm Name: Verma Traders",
                "Tax Number: 29ABCDE1234F1Z5",
                "Reference Number: REF-042",
                "Contact Number: +91 98765 43210",
                "Verified: Yes",
                "Checklist:",
                "- Cheque: Yes",
                "- Letterhead: No",
                "Submitted At: 14/03/2024 09:26:53 UTC",
            ]
        );
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let record = Submission::reconstruct(
            SubmissionId::new(),
            None,
            None,
            None,
            None,
            None,
            Checklist::default(),
            false,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        );
        let document = DocumentComposer::compose(&record).unwrap();

        let lines = extract_text_lines(&document.bytes);
        assert_eq!(lines[1], "Name: N/A");
        assert_eq!(lines[2], "Firm Name: N/A");
        assert_eq!(lines[3], "Tax Number: N/A");
        assert_eq!(lines[4], "Reference Number: N/A");
        assert_eq!(lines[5], "Contact Number: N/A");
        assert_eq!(lines[6], "Verified: No");
    }

    #[test]
    fn test_compose_is_deterministic() {
        let record = full_record();

        let first = DocumentComposer::compose(&record).unwrap();
        let second = DocumentComposer::compose(&record).unwrap();

        assert_eq!(
            extract_text_lines(&first.bytes),
            extract_text_lines(&second.bytes)
        );
    }

    #[test]
    fn test_file_name_follows_entry_convention() {
        let record = full_record();
        let document = DocumentComposer::compose(&record).unwrap();

        assert_eq!(
            document.file_name,
            format!("Asha Verma-{}.pdf", record.id())
        );
    }
}
