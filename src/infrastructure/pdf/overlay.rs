use std::path::Path;

use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId};
use thiserror::Error;

use crate::domain::entities::Submission;
use crate::infrastructure::pdf::{ComposedDocument, MISSING_FIELD};

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("I/O error reading template: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template parse error: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("Template has no pages")]
    NoPages,
}

const STAMP_FONT: &str = "Fo1";
const STAMP_X: i64 = 100;
const STAMP_Y: i64 = 700;
const STAMP_LINE_STEP: i64 = 20;
const STAMP_SIZE: i64 = 12;

/// Master template holder for the single-document path.
///
/// The template bytes are read once and kept immutable; every `stamp` call
/// parses a fresh in-memory copy, so concurrent stamps never interfere.
/// A load failure disables only this path — bulk composition is unaffected.
pub struct TemplateOverlay {
    template: Vec<u8>,
}

impl TemplateOverlay {
    /// Load and validate the master template from disk
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Build from in-memory template bytes, validating up front
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TemplateError> {
        let doc = Document::load_mem(&bytes)?;
        if doc.get_pages().is_empty() {
            return Err(TemplateError::NoPages);
        }

        Ok(Self { template: bytes })
    }

    /// Stamp firm name and tax number onto the first page of a fresh copy
    /// of the template and return the modified document.
    pub fn stamp(&self, record: &Submission) -> Result<ComposedDocument, TemplateError> {
        let mut doc = Document::load_mem(&self.template)?;
        let page_id = *doc
            .get_pages()
            .values()
            .next()
            .ok_or(TemplateError::NoPages)?;

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        register_stamp_font(&mut doc, page_id, font_id)?;

        fn field(value: Option<&str>) -> &str {
            value.unwrap_or(MISSING_FIELD)
        }
        let mut content = doc.get_and_decode_page_content(page_id)?;
        content.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![STAMP_FONT.into(), STAMP_SIZE.into()]),
            Operation::new("Td", vec![STAMP_X.into(), STAMP_Y.into()]),
            Operation::new(
                "Tj",
                vec![Object::string_literal(format!(
                    "Firm Name: {}",
                    field(record.firm_name())
                ))],
            ),
            Operation::new("Td", vec![0.into(), (-STAMP_LINE_STEP).into()]),
            Operation::new(
                "Tj",
                vec![Object::string_literal(format!(
                    "Tax Number: {}",
                    field(record.tax_number())
                ))],
            ),
            Operation::new("ET", vec![]),
        ]);
        doc.change_page_content(page_id, content.encode()?)?;

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;

        Ok(ComposedDocument {
            file_name: record.document_key().file_name(),
            bytes: Bytes::from(bytes),
        })
    }
}

/// Make the stamp font reachable from the page's resources. The Font entry
/// may be absent, inline, or a reference into the document body.
fn register_stamp_font(
    doc: &mut Document,
    page_id: ObjectId,
    font_id: ObjectId,
) -> Result<(), TemplateError> {
    enum FontSlot {
        Inline,
        Referenced(ObjectId),
        Missing,
    }

    let slot = {
        let resources = doc.get_or_create_resources(page_id)?.as_dict_mut()?;
        match resources.get(b"Font") {
            Ok(Object::Reference(id)) => FontSlot::Referenced(*id),
            Ok(Object::Dictionary(_)) => FontSlot::Inline,
            _ => FontSlot::Missing,
        }
    };

    match slot {
        FontSlot::Inline => {
            let resources = doc.get_or_create_resources(page_id)?.as_dict_mut()?;
            resources
                .get_mut(b"Font")?
                .as_dict_mut()?
                .set(STAMP_FONT, font_id);
        }
        FontSlot::Referenced(id) => {
            doc.get_object_mut(id)?.as_dict_mut()?.set(STAMP_FONT, font_id);
        }
        FontSlot::Missing => {
            let resources = doc.get_or_create_resources(page_id)?.as_dict_mut()?;
            resources.set("Font", dictionary! { STAMP_FONT => font_id });
        }
    }

    Ok(())
}
