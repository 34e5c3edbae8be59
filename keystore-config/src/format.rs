//! Archive formats a key store can be generated in, and the registry of
//! formats the server currently advertises.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display, Formatter},
    path::Path,
    str::FromStr,
};
use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::{
    constants::{ARCHIVE_BASE_NAME, CERT_PEM},
    error::{KeyStoreConfigError, Result},
};

/// Store formats with a known archive file extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
pub enum KnownFormat {
    #[strum(serialize = "PKCS12")]
    Pkcs12,
    #[strum(serialize = "JKS")]
    Jks,
    #[strum(serialize = "BCFKS")]
    Bcfks,
}

impl KnownFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pkcs12 => "p12",
            Self::Jks => "jks",
            Self::Bcfks => "bcfks",
        }
    }

    /// Identifier used by the server for this format.
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// Returns the archive file extension for a format identifier, or `None` if
/// the identifier is unknown.
pub fn file_extension(id: &str) -> Option<&'static str> {
    KnownFormat::from_str(id).ok().map(KnownFormat::extension)
}

/// A format the user can select.
///
/// Store formats keep the identifier exactly as the server advertised it, so
/// formats this crate has never heard of can still be selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    Store(String),
    /// Capture a bare certificate with no store around it.
    CertificatePem,
}

impl ArchiveFormat {
    pub fn store(id: impl Into<String>) -> Self {
        Self::Store(id.into())
    }

    pub fn is_certificate_only(&self) -> bool {
        matches!(self, Self::CertificatePem)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Store(id) => id,
            Self::CertificatePem => CERT_PEM,
        }
    }

    pub fn file_extension(&self) -> Option<&'static str> {
        match self {
            Self::Store(id) => file_extension(id),
            Self::CertificatePem => None,
        }
    }

    /// File name of the generated archive, e.g. `keystore.p12`.
    pub fn archive_filename(&self) -> Option<String> {
        self.file_extension()
            .map(|extension| format!("{ARCHIVE_BASE_NAME}.{extension}"))
    }
}

impl From<&str> for ArchiveFormat {
    fn from(id: &str) -> Self {
        if id == CERT_PEM {
            Self::CertificatePem
        } else {
            Self::Store(id.to_string())
        }
    }
}

impl From<KnownFormat> for ArchiveFormat {
    fn from(format: KnownFormat) -> Self {
        Self::Store(format.id().to_string())
    }
}

impl Display for ArchiveFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ArchiveFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ArchiveFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::from(id.as_str()))
    }
}

/// Orders the selectable formats: the advertised ones in server order, then
/// the certificate-only sentinel if it is permitted.
pub fn selectable_formats<S: AsRef<str>>(
    advertised: &[S],
    allow_certificate_pem: bool,
) -> Vec<ArchiveFormat> {
    advertised
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| *id != CERT_PEM)
        .map(ArchiveFormat::store)
        .chain(allow_certificate_pem.then_some(ArchiveFormat::CertificatePem))
        .collect()
}

/// Formats the server advertises, plus whether the certificate-only sentinel
/// may be offered.
///
/// The advertised list is empty until server info has been loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRegistry {
    advertised: Vec<String>,
    allow_certificate_pem: bool,
}

impl FormatRegistry {
    pub fn new(allow_certificate_pem: bool) -> Self {
        Self {
            advertised: Vec::new(),
            allow_certificate_pem,
        }
    }

    pub fn with_advertised(mut self, advertised: Vec<String>) -> Self {
        self.advertised = advertised;
        self
    }

    /// Replace the advertised formats with the ones in `server_info`.
    pub fn load(&mut self, server_info: &ServerInfo) {
        self.advertised = server_info.supported_keystore_types().to_vec();
        debug!("Loaded advertised formats: {:?}", self.advertised);
    }

    pub fn offered(&self) -> Vec<ArchiveFormat> {
        selectable_formats(&self.advertised, self.allow_certificate_pem)
    }

    /// The first offered format, if any.
    pub fn default_format(&self) -> Option<ArchiveFormat> {
        self.offered().into_iter().next()
    }

    pub fn is_offered(&self, format: &ArchiveFormat) -> bool {
        self.offered().contains(format)
    }

    /// Look up an offered format by identifier. Hosts call this before
    /// handing a user choice to the form.
    pub fn resolve(&self, id: &str) -> Result<ArchiveFormat> {
        let format = ArchiveFormat::from(id);
        if self.is_offered(&format) {
            Ok(format)
        } else {
            Err(KeyStoreConfigError::FormatNotOffered(id.to_string()))
        }
    }
}

/// The slice of the admin server-info document this workflow reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    #[serde(default)]
    pub crypto_info: Option<CryptoInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoInfo {
    #[serde(default)]
    pub supported_keystore_types: Vec<String>,
}

impl ServerInfo {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_str(&json)
    }

    /// Advertised key-store types, empty if the document has none.
    pub fn supported_keystore_types(&self) -> &[String] {
        self.crypto_info
            .as_ref()
            .map(|info| info.supported_keystore_types.as_slice())
            .unwrap_or_default()
    }
}

impl FromStr for ServerInfo {
    type Err = KeyStoreConfigError;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn known_formats_have_extensions() {
        assert_eq!(file_extension("PKCS12"), Some("p12"));
        assert_eq!(file_extension("JKS"), Some("jks"));
        assert_eq!(file_extension("BCFKS"), Some("bcfks"));

        for format in KnownFormat::iter() {
            assert_eq!(file_extension(format.id()), Some(format.extension()));
        }
    }

    #[test]
    fn unknown_format_has_no_extension() {
        assert_eq!(file_extension("PEM"), None);
        assert_eq!(file_extension(""), None);
        assert_eq!(file_extension("pkcs12"), None);
        assert_eq!(ArchiveFormat::CertificatePem.file_extension(), None);
    }

    #[test]
    fn archive_filename_uses_extension() {
        assert_eq!(
            ArchiveFormat::from(KnownFormat::Jks).archive_filename(),
            Some("keystore.jks".to_string())
        );
        assert_eq!(ArchiveFormat::CertificatePem.archive_filename(), None);
    }

    #[test]
    fn sentinel_is_appended_last_when_permitted() {
        let advertised = ["JKS", "PKCS12"];

        let formats = selectable_formats(&advertised, true);
        assert_eq!(
            formats,
            vec![
                ArchiveFormat::store("JKS"),
                ArchiveFormat::store("PKCS12"),
                ArchiveFormat::CertificatePem,
            ]
        );

        let formats = selectable_formats(&advertised, false);
        assert_eq!(
            formats,
            vec![ArchiveFormat::store("JKS"), ArchiveFormat::store("PKCS12")]
        );
    }

    #[test]
    fn empty_advertised_list() {
        let none: [&str; 0] = [];
        assert!(selectable_formats(&none, false).is_empty());
        assert_eq!(
            selectable_formats(&none, true),
            vec![ArchiveFormat::CertificatePem]
        );
    }

    #[test]
    fn format_text_round_trips_through_json() {
        let json = serde_json::to_string(&ArchiveFormat::CertificatePem).unwrap();
        assert_eq!(json, "\"Certificate PEM\"");
        let format: ArchiveFormat = serde_json::from_str(&json).unwrap();
        assert!(format.is_certificate_only());
    }

    #[test]
    fn registry_loads_server_info() {
        let server_info = ServerInfo::from_str(
            r#"{
                "systemInfo": { "version": "26.0.0" },
                "cryptoInfo": { "supportedKeystoreTypes": ["PKCS12", "JKS", "BCFKS"] }
            }"#,
        )
        .unwrap();

        let mut registry = FormatRegistry::new(false);
        assert_eq!(registry.default_format(), None);

        registry.load(&server_info);
        assert_eq!(registry.default_format(), Some(ArchiveFormat::store("PKCS12")));
        assert_eq!(registry.offered().len(), 3);
    }

    #[test]
    fn missing_crypto_info_means_no_formats() {
        let server_info = ServerInfo::from_str("{}").unwrap();
        assert!(server_info.supported_keystore_types().is_empty());
    }

    #[test]
    fn resolve_only_accepts_offered_formats() {
        let registry = FormatRegistry::new(false).with_advertised(vec!["JKS".to_string()]);

        assert_eq!(registry.resolve("JKS").unwrap(), ArchiveFormat::store("JKS"));
        assert!(matches!(
            registry.resolve("PKCS12"),
            Err(KeyStoreConfigError::FormatNotOffered(_))
        ));
        assert!(registry.resolve(CERT_PEM).is_err());
    }
}
