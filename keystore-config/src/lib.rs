//! Key-store configuration capture for the client administration console.
//!
//! The crate models the "generate keys" workflow headlessly: a registry of
//! archive formats, a form that derives which fields are relevant for the
//! selected format, a paired file-import field, and a dialog state machine
//! that hands the finished [`KeyStoreConfig`] to a caller-supplied callback.
//! Rendering, routing and translation belong to the host application.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod capability;
pub mod config;
pub mod constants;
pub mod dialog;
pub mod error;
pub mod file_import;
pub mod form;
pub mod format;
pub mod infrastructure;
pub mod labels;
pub mod types;

pub use dialog::{DialogCallbacks, KeyConfigurationDialog};
pub use error::KeyStoreConfigError;
pub use form::{Field, FieldSet, FormMode, KeyConfigurationForm};
pub use format::{ArchiveFormat, FormatRegistry};
pub use types::KeyStoreConfig;
