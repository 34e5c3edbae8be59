//! Capture of a user-selected file for import.
//!
//! The content is never parsed or validated here. Whatever consumes the
//! import on the server side is responsible for that.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Formatter};

/// A selected file: its content together with the name it is displayed
/// under. One is never present without the other.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedFile {
    #[serde(with = "base64_content")]
    content: Bytes,
    filename: String,
}

impl ImportedFile {
    pub fn new(content: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
        }
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

// Content may hold private keys, only its size is shown.
impl Debug for ImportedFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportedFile")
            .field("content", &format_args!("[{} bytes]", self.content.len()))
            .field("filename", &self.filename)
            .finish()
    }
}

/// Form field holding at most one [`ImportedFile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileImportField {
    selection: Option<ImportedFile>,
}

impl FileImportField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any previous selection with `content` named `display_name`.
    pub fn on_select(&mut self, content: impl Into<Bytes>, display_name: impl Into<String>) {
        self.selection = Some(ImportedFile::new(content, display_name));
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&ImportedFile> {
        self.selection.as_ref()
    }

    /// A selection counts as a value only if it actually has content.
    pub fn has_value(&self) -> bool {
        self.selection
            .as_ref()
            .map_or(false, |file| !file.content.is_empty())
    }
}

mod base64_content {
    use super::*;

    pub fn serialize<S: Serializer>(content: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(content))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded)
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}
