//! The configuration produced by the workflow.

use serde::{Deserialize, Serialize};

use crate::{
    file_import::ImportedFile, format::ArchiveFormat,
    infrastructure::sensitive_info::SensitiveString,
};

/// A finished key-store configuration, as handed to the caller's save
/// callback. The alias is always present; other fields hidden in the form
/// at confirmation time are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStoreConfig {
    pub format: ArchiveFormat,
    pub key_alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_password: Option<SensitiveString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_password: Option<SensitiveString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm_certificate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported_file: Option<ImportedFile>,
}

impl KeyStoreConfig {
    /// File name of the archive this configuration generates, if the format
    /// has one.
    pub fn archive_filename(&self) -> Option<String> {
        self.format.archive_filename()
    }
}
