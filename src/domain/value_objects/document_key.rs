use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Storage key for a generated document, derived from the tax number.
///
/// Normalization maps every character outside `[A-Za-z0-9_]` to `_`. Two
/// distinct identifiers (e.g. "AB-12" and "AB_12") can normalize to the same
/// string, so whenever normalization altered the raw value an 8-hex-char
/// SHA-256 prefix of the raw identifier is appended to keep them distinct.
/// A missing or blank identifier maps to the fixed sentinel key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Key used when a submission carries no tax number
    pub const SENTINEL: &'static str = "no-id";

    /// Derive the key for a tax number. Total: every input maps to
    /// exactly one key.
    pub fn derive(tax_number: Option<&str>) -> Self {
        let raw = match tax_number.map(str::trim) {
            None | Some("") => return Self(Self::SENTINEL.to_string()),
            Some(raw) => raw,
        };

        let normalized: String = raw
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if normalized == raw {
            Self(normalized)
        } else {
            let digest = Sha256::digest(raw.as_bytes());
            Self(format!("{}-{}", normalized, hex::encode(&digest[..4])))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name for the key inside a document store
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.0)
    }
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
