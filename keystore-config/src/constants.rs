//! Constants shared by the workflow and its hosts.

/// Wire text of the certificate-only pseudo-format.
pub const CERT_PEM: &str = "Certificate PEM";

/// Base name of a generated key-store archive. The extension comes from the
/// selected format.
pub const ARCHIVE_BASE_NAME: &str = "keystore";

/// Label keys looked up through [`crate::labels::LabelLookup`].
pub mod labels {
    pub const ARCHIVE_FORMAT: &str = "archiveFormat";
    pub const ARCHIVE_FORMAT_HELP: &str = "archiveFormatHelp";
    pub const IMPORT_FILE: &str = "importFile";
    pub const KEY_ALIAS: &str = "keyAlias";
    pub const KEY_PASSWORD: &str = "keyPassword";
    pub const STORE_PASSWORD: &str = "storePassword";
    pub const REALM_CERTIFICATE: &str = "realmCertificateAlias";
    pub const GENERATE_KEYS: &str = "generateKeys";
    pub const GENERATE_KEYS_DESCRIPTION: &str = "generateKeysDescription";
    pub const GENERATE: &str = "generate";
    pub const EMPTY_PERMISSIONS: &str = "emptyPermissions";
    pub const EMPTY_PERMISSION_INSTRUCTIONS: &str = "emptyPermissionInstructions";
}
