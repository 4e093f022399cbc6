mod composer;
mod overlay;

pub use composer::{DocumentComposer, RenderError};
pub use overlay::{TemplateOverlay, TemplateError};

use bytes::Bytes;

/// Token rendered in place of an absent optional field.
///
/// Field order and this token are part of the document contract; downstream
/// diffing depends on both being stable.
pub const MISSING_FIELD: &str = "N/A";

/// A freshly generated document: raw bytes plus a suggested file name.
/// Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ComposedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}
