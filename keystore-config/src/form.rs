//! The in-progress key-store configuration and the fields relevant to it.
//!
//! Which fields are shown and which fields must be filled in are answered by
//! the same derivation, [`visible_fields`]. A value typed into a field that
//! later becomes hidden can therefore neither block nor satisfy
//! completeness.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::{btree_set, BTreeSet};
use strum::{Display, EnumIter};

use crate::{
    constants::labels,
    file_import::FileImportField,
    format::ArchiveFormat,
    infrastructure::sensitive_info::SensitiveString,
    types::KeyStoreConfig,
};

/// A field of the key configuration form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Field {
    Format,
    ImportFile,
    KeyAlias,
    KeyPassword,
    StorePassword,
    RealmCertificate,
}

impl Field {
    /// Whether the field must hold a value while it is visible.
    pub fn is_required(self) -> bool {
        match self {
            Self::Format | Self::KeyAlias | Self::KeyPassword | Self::StorePassword => true,
            Self::ImportFile | Self::RealmCertificate => false,
        }
    }

    /// Key of the field's label for the host's label lookup.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Format => labels::ARCHIVE_FORMAT,
            Self::ImportFile => labels::IMPORT_FILE,
            Self::KeyAlias => labels::KEY_ALIAS,
            Self::KeyPassword => labels::KEY_PASSWORD,
            Self::StorePassword => labels::STORE_PASSWORD,
            Self::RealmCertificate => labels::REALM_CERTIFICATE,
        }
    }
}

/// An ordered set of [`Field`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(BTreeSet<Field>);

impl FieldSet {
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    /// The members that are required.
    pub fn required(&self) -> impl Iterator<Item = Field> + '_ {
        self.iter().filter(|field| field.is_required())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = btree_set::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// How the workflow was set up by its host. Fixed for the lifetime of a
/// dialog; none of these are user-editable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case", default)]
pub struct FormMode {
    /// Accept an imported file.
    pub use_file: bool,
    /// The owning client speaks SAML, which adds the realm certificate
    /// toggle to the store settings.
    pub is_saml: bool,
    /// Offer the certificate-only pseudo-format.
    pub has_pem: bool,
}

impl FormMode {
    /// Passwords are supplied inside an imported file, so they are not asked
    /// for separately.
    pub fn hide_password(&self) -> bool {
        self.use_file
    }
}

/// Derive the fields relevant for `format` under `mode`.
///
/// A missing format (nothing advertised yet) is treated like any store
/// format.
pub fn visible_fields(mode: FormMode, format: Option<&ArchiveFormat>) -> FieldSet {
    let mut fields = vec![Field::Format];

    if mode.use_file {
        fields.push(Field::ImportFile);
    }

    let store_settings = !format.map_or(false, ArchiveFormat::is_certificate_only);
    if store_settings {
        fields.push(Field::KeyAlias);
        if !mode.hide_password() {
            fields.push(Field::KeyPassword);
            fields.push(Field::StorePassword);
        }
        if mode.is_saml {
            fields.push(Field::RealmCertificate);
        }
    }

    fields.into_iter().collect()
}

/// Mutable state of one dialog activation.
#[derive(Debug, Clone)]
pub struct KeyConfigurationForm {
    mode: FormMode,
    offered: Vec<ArchiveFormat>,
    format: Option<ArchiveFormat>,
    default_alias: String,
    key_alias: String,
    key_password: SensitiveString,
    store_password: SensitiveString,
    realm_certificate: bool,
    file: FileImportField,
}

impl KeyConfigurationForm {
    /// A fresh form with `default_alias` as key alias and the first of
    /// `offered` as format.
    pub fn new(
        mode: FormMode,
        default_alias: impl Into<String>,
        offered: Vec<ArchiveFormat>,
    ) -> Self {
        let default_alias = default_alias.into();
        Self {
            mode,
            format: offered.first().cloned(),
            offered,
            key_alias: default_alias.clone(),
            default_alias,
            key_password: SensitiveString::default(),
            store_password: SensitiveString::default(),
            realm_certificate: false,
            file: FileImportField::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn offered_formats(&self) -> &[ArchiveFormat] {
        &self.offered
    }

    pub fn format(&self) -> Option<&ArchiveFormat> {
        self.format.as_ref()
    }

    /// Select `format`. It must be one of [`Self::offered_formats`]; the
    /// selector only offers those, so this is not re-validated.
    pub fn set_format(&mut self, format: ArchiveFormat) {
        debug_assert!(
            self.offered.contains(&format),
            "format {format} is not among the offered formats"
        );
        self.format = Some(format);
    }

    /// The offered formats changed, e.g. server info finished loading. Keeps
    /// the current selection if it is still offered, otherwise falls back to
    /// the first offered format.
    pub fn on_formats_loaded(&mut self, offered: Vec<ArchiveFormat>) {
        let still_offered = self
            .format
            .as_ref()
            .map_or(false, |format| offered.contains(format));
        if !still_offered {
            self.format = offered.first().cloned();
        }
        self.offered = offered;
    }

    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    pub fn set_key_alias(&mut self, alias: impl Into<String>) {
        self.key_alias = alias.into();
    }

    pub fn key_password(&self) -> &SensitiveString {
        &self.key_password
    }

    pub fn set_key_password(&mut self, password: impl Into<SensitiveString>) {
        self.key_password = password.into();
    }

    pub fn store_password(&self) -> &SensitiveString {
        &self.store_password
    }

    pub fn set_store_password(&mut self, password: impl Into<SensitiveString>) {
        self.store_password = password.into();
    }

    pub fn realm_certificate(&self) -> bool {
        self.realm_certificate
    }

    pub fn set_realm_certificate(&mut self, enabled: bool) {
        self.realm_certificate = enabled;
    }

    pub fn file_import(&self) -> &FileImportField {
        &self.file
    }

    /// Forward a file selection to the import field.
    pub fn select_file(&mut self, content: impl Into<Bytes>, display_name: impl Into<String>) {
        self.file.on_select(content, display_name);
    }

    pub fn clear_file(&mut self) {
        self.file.clear();
    }

    pub fn visible_fields(&self) -> FieldSet {
        visible_fields(self.mode, self.format.as_ref())
    }

    /// Whether `field` holds a value, regardless of whether it is visible.
    pub fn has_value(&self, field: Field) -> bool {
        match field {
            Field::Format => self.format.is_some(),
            Field::ImportFile => self.file.has_value(),
            Field::KeyAlias => !self.key_alias.is_empty(),
            Field::KeyPassword => !self.key_password.is_empty(),
            Field::StorePassword => !self.store_password.is_empty(),
            // A toggle always holds a value.
            Field::RealmCertificate => true,
        }
    }

    /// Visible required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<Field> {
        self.visible_fields()
            .required()
            .filter(|field| !self.has_value(*field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Turn a complete form into the finished configuration, keeping only
    /// the values of visible fields. An incomplete form is handed back.
    pub fn into_config(self) -> Result<KeyStoreConfig, Self> {
        if !self.is_complete() {
            return Err(self);
        }
        match self.snapshot() {
            Some(config) => Ok(config),
            None => Err(self),
        }
    }

    /// The values of the visible fields, or `None` while no format is
    /// selected. Hidden values stay in the form and are never emitted.
    ///
    /// The alias is emitted whatever the format. An alias cleared while
    /// hidden falls back to the one the form was seeded with.
    pub fn snapshot(&self) -> Option<KeyStoreConfig> {
        let format = self.format.clone()?;
        let visible = self.visible_fields();
        let shown = |field: Field| visible.contains(field);

        Some(KeyStoreConfig {
            format,
            key_alias: self.alias_or_default().to_string(),
            key_password: shown(Field::KeyPassword).then(|| self.key_password.clone()),
            store_password: shown(Field::StorePassword)
                .then(|| self.store_password.clone()),
            realm_certificate: shown(Field::RealmCertificate)
                .then_some(self.realm_certificate),
            imported_file: shown(Field::ImportFile)
                .then(|| self.file.selection().cloned())
                .flatten(),
        })
    }

    fn alias_or_default(&self) -> &str {
        if self.key_alias.is_empty() {
            &self.default_alias
        } else {
            &self.key_alias
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::KnownFormat;
    use strum::IntoEnumIterator;

    fn offered(has_pem: bool) -> Vec<ArchiveFormat> {
        KnownFormat::iter()
            .map(ArchiveFormat::from)
            .chain(has_pem.then_some(ArchiveFormat::CertificatePem))
            .collect()
    }

    fn all_modes() -> Vec<FormMode> {
        let mut modes = Vec::new();
        for use_file in [false, true] {
            for is_saml in [false, true] {
                for has_pem in [false, true] {
                    modes.push(FormMode {
                        use_file,
                        is_saml,
                        has_pem,
                    });
                }
            }
        }
        modes
    }

    #[test]
    fn store_formats_show_store_settings() {
        for mode in all_modes() {
            for format in KnownFormat::iter().map(ArchiveFormat::from) {
                let fields = visible_fields(mode, Some(&format));
                assert!(fields.contains(Field::Format));
                assert!(fields.contains(Field::KeyAlias), "{mode:?} {format}");
                assert_eq!(fields.contains(Field::KeyPassword), !mode.use_file);
                assert_eq!(fields.contains(Field::StorePassword), !mode.use_file);
                assert_eq!(fields.contains(Field::RealmCertificate), mode.is_saml);
                assert_eq!(fields.contains(Field::ImportFile), mode.use_file);
            }
        }
    }

    #[test]
    fn unknown_store_format_shows_store_settings() {
        let format = ArchiveFormat::store("PKCS11");
        let fields = visible_fields(FormMode::default(), Some(&format));
        assert!(fields.contains(Field::KeyAlias));
        assert!(fields.contains(Field::StorePassword));
    }

    #[test]
    fn certificate_only_hides_store_settings() {
        for mode in all_modes() {
            let fields = visible_fields(mode, Some(&ArchiveFormat::CertificatePem));
            for field in [
                Field::KeyAlias,
                Field::KeyPassword,
                Field::StorePassword,
                Field::RealmCertificate,
            ] {
                assert!(!fields.contains(field), "{mode:?} shows {field}");
            }
            assert_eq!(fields.contains(Field::ImportFile), mode.use_file);
        }
    }

    #[test]
    fn default_format_is_first_offered() {
        let form = KeyConfigurationForm::new(FormMode::default(), "my-client", offered(false));
        assert_eq!(form.format(), Some(&ArchiveFormat::store("PKCS12")));
        assert_eq!(form.key_alias(), "my-client");
    }

    #[test]
    fn empty_alias_blocks_completeness() {
        let mode = FormMode {
            use_file: true,
            ..FormMode::default()
        };
        let mut form = KeyConfigurationForm::new(mode, "", offered(false));
        assert!(!form.is_complete());
        assert_eq!(form.missing_fields(), vec![Field::KeyAlias]);

        form.set_key_alias("client-key");
        assert!(form.is_complete());
    }

    #[test]
    fn passwords_required_unless_hidden() {
        let mut form = KeyConfigurationForm::new(FormMode::default(), "client-key", offered(false));
        assert_eq!(
            form.missing_fields(),
            vec![Field::KeyPassword, Field::StorePassword]
        );

        form.set_key_password("key-secret");
        assert_eq!(form.missing_fields(), vec![Field::StorePassword]);
        form.set_store_password("store-secret");
        assert!(form.is_complete());
    }

    #[test]
    fn hidden_fields_do_not_affect_completeness() {
        let mode = FormMode {
            has_pem: true,
            ..FormMode::default()
        };
        let mut form = KeyConfigurationForm::new(mode, "", offered(true));
        form.set_format(ArchiveFormat::CertificatePem);
        assert!(form.is_complete());

        // Editing fields that are hidden changes nothing.
        form.set_key_alias("typed");
        assert!(form.is_complete());
        form.set_key_alias("");
        assert!(form.is_complete());
        form.set_store_password("secret");
        assert!(form.is_complete());

        // Once visible again, the store fields are judged on what they hold.
        form.set_format(ArchiveFormat::store("JKS"));
        assert!(!form.is_complete());
        assert_eq!(
            form.missing_fields(),
            vec![Field::KeyAlias, Field::KeyPassword]
        );
    }

    #[test]
    fn incomplete_form_is_handed_back() {
        let form = KeyConfigurationForm::new(FormMode::default(), "", offered(false));
        let form = form.into_config().unwrap_err();
        assert_eq!(form.key_alias(), "");
        assert!(!form.is_complete());
    }

    #[test]
    fn snapshot_reflects_visible_fields_only() {
        let mut form = KeyConfigurationForm::new(FormMode::default(), "client-key", Vec::new());
        assert_eq!(form.snapshot(), None);

        form.on_formats_loaded(offered(true));
        form.set_store_password("store-secret");
        let config = form.snapshot().unwrap();
        assert_eq!(config.key_alias, "client-key");
        assert!(config.store_password.is_some());

        form.set_format(ArchiveFormat::CertificatePem);
        let config = form.snapshot().unwrap();
        assert_eq!(config.key_alias, "client-key");
        assert_eq!(config.store_password, None);
        // The hidden value is still there if the user switches back.
        assert_eq!(form.store_password().expose(), "store-secret");
    }

    #[test]
    fn no_formats_means_incomplete() {
        let mut form = KeyConfigurationForm::new(FormMode::default(), "client-key", Vec::new());
        form.set_key_password("a");
        form.set_store_password("b");
        assert_eq!(form.format(), None);
        assert_eq!(form.missing_fields(), vec![Field::Format]);

        form.on_formats_loaded(offered(false));
        assert_eq!(form.format(), Some(&ArchiveFormat::store("PKCS12")));
        assert!(form.is_complete());
    }

    #[test]
    fn reloading_formats_keeps_offered_selection() {
        let mut form = KeyConfigurationForm::new(FormMode::default(), "a", offered(false));
        form.set_format(ArchiveFormat::store("JKS"));

        form.on_formats_loaded(vec![ArchiveFormat::store("BCFKS"), ArchiveFormat::store("JKS")]);
        assert_eq!(form.format(), Some(&ArchiveFormat::store("JKS")));

        form.on_formats_loaded(vec![ArchiveFormat::store("BCFKS")]);
        assert_eq!(form.format(), Some(&ArchiveFormat::store("BCFKS")));
    }

    #[test]
    fn imported_file_is_optional() {
        let mode = FormMode {
            use_file: true,
            ..FormMode::default()
        };
        let mut form = KeyConfigurationForm::new(mode, "alias", offered(false));
        assert!(form.visible_fields().contains(Field::ImportFile));
        assert!(form.is_complete());

        form.select_file(&b"content"[..], "store.p12");
        let config = form.into_config().unwrap();
        let file = config.imported_file.unwrap();
        assert_eq!(file.filename(), "store.p12");
        assert_eq!(config.key_password, None);
        assert_eq!(config.store_password, None);
    }

    #[test]
    fn alias_cleared_while_hidden_falls_back_to_default() {
        let mode = FormMode {
            has_pem: true,
            ..FormMode::default()
        };
        let mut form = KeyConfigurationForm::new(mode, "my-client", offered(true));
        form.set_format(ArchiveFormat::CertificatePem);
        form.set_key_alias("");

        let config = form.into_config().unwrap();
        assert_eq!(config.key_alias, "my-client");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["keyAlias"], "my-client");
    }

    #[test]
    fn config_only_carries_visible_values() {
        let mode = FormMode {
            is_saml: true,
            has_pem: true,
            ..FormMode::default()
        };
        let mut form = KeyConfigurationForm::new(mode, "alias", offered(true));
        form.set_key_password("key-secret");
        form.set_realm_certificate(true);
        form.set_format(ArchiveFormat::CertificatePem);
        form.select_file(&b"ignored"[..], "ignored.pem");

        let config = form.into_config().unwrap();
        assert_eq!(config.format, ArchiveFormat::CertificatePem);
        assert_eq!(config.key_alias, "alias");
        assert_eq!(config.key_password, None);
        assert_eq!(config.realm_certificate, None);
        assert_eq!(config.imported_file, None);
    }

    #[test]
    fn realm_certificate_is_carried_for_saml_clients() {
        let mode = FormMode {
            is_saml: true,
            use_file: true,
            ..FormMode::default()
        };
        let mut form = KeyConfigurationForm::new(mode, "alias", offered(false));
        form.set_realm_certificate(true);
        assert!(form.realm_certificate());

        let config = form.into_config().unwrap();
        assert_eq!(config.realm_certificate, Some(true));
        assert_eq!(config.key_alias, "alias");
    }
}
