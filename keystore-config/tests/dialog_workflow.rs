use keystore_config::{
    dialog::{CancelOutcome, ConfirmOutcome, OpenOutcome},
    ArchiveFormat, DialogCallbacks, Field, FormMode, KeyConfigurationDialog, KeyStoreConfig,
};

#[derive(Debug, Default)]
struct Host {
    saved: Vec<KeyStoreConfig>,
    toggles: usize,
}

impl DialogCallbacks for Host {
    fn save(&mut self, config: KeyStoreConfig) {
        self.saved.push(config);
    }

    fn toggle_dialog(&mut self) {
        self.toggles += 1;
    }
}

fn advertised() -> Vec<String> {
    vec!["PKCS12".to_string(), "JKS".to_string(), "BCFKS".to_string()]
}

/// Passwords arrive inside the imported file, so only the alias is asked for.
fn import_mode() -> FormMode {
    FormMode {
        use_file: true,
        is_saml: false,
        has_pem: true,
    }
}

#[test]
fn alias_gates_submission() {
    let mut dialog = KeyConfigurationDialog::new("", import_mode(), advertised(), Host::default());
    assert_eq!(dialog.open(), OpenOutcome::Opened);

    let form = dialog.form().unwrap();
    assert_eq!(form.format(), Some(&ArchiveFormat::store("PKCS12")));
    assert_eq!(form.key_alias(), "");
    assert!(!dialog.submit_control().unwrap().is_enabled());

    dialog.form_mut().unwrap().set_key_alias("client-key");
    assert!(dialog.submit_control().unwrap().is_enabled());

    assert_eq!(dialog.confirm(), ConfirmOutcome::Confirmed);
    assert!(!dialog.is_open());

    let host = dialog.callbacks();
    assert_eq!(host.saved.len(), 1);
    assert_eq!(host.toggles, 1);
    assert_eq!(host.saved[0].format, ArchiveFormat::store("PKCS12"));
    assert_eq!(host.saved[0].key_alias, "client-key");
}

#[test]
fn switching_to_certificate_only_enables_submission() {
    let mode = FormMode {
        has_pem: true,
        ..FormMode::default()
    };
    let mut dialog = KeyConfigurationDialog::new("my-client", mode, advertised(), Host::default());
    let _ = dialog.open();

    // Alias is filled by default, passwords are not.
    assert_eq!(
        dialog.confirm(),
        ConfirmOutcome::Rejected {
            missing: vec![Field::KeyPassword, Field::StorePassword]
        }
    );

    dialog
        .form_mut()
        .unwrap()
        .set_format(ArchiveFormat::CertificatePem);
    assert!(dialog.submit_control().unwrap().is_enabled());

    assert_eq!(dialog.confirm(), ConfirmOutcome::Confirmed);
    let saved = &dialog.callbacks().saved;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].format, ArchiveFormat::CertificatePem);
    assert_eq!(saved[0].key_alias, "my-client");
    assert_eq!(saved[0].store_password, None);
}

#[test]
fn cancel_discards_edits() {
    let mut dialog = KeyConfigurationDialog::new(
        "my-client",
        FormMode::default(),
        advertised(),
        Host::default(),
    );
    let _ = dialog.open();
    {
        let form = dialog.form_mut().unwrap();
        form.set_key_alias("half-done");
        form.set_format(ArchiveFormat::store("JKS"));
        form.set_store_password("secret");
    }

    assert_eq!(dialog.cancel(), CancelOutcome::Cancelled);
    assert!(!dialog.is_open());
    assert!(dialog.callbacks().saved.is_empty());
    assert_eq!(dialog.callbacks().toggles, 1);

    let _ = dialog.open();
    let form = dialog.form().unwrap();
    assert_eq!(form.key_alias(), "my-client");
    assert_eq!(form.format(), Some(&ArchiveFormat::store("PKCS12")));
    assert_eq!(
        form.missing_fields(),
        vec![Field::KeyPassword, Field::StorePassword]
    );
}

#[test]
fn imported_file_travels_with_configuration() {
    let mut dialog =
        KeyConfigurationDialog::new("my-client", import_mode(), advertised(), Host::default());
    let _ = dialog.open();
    {
        let form = dialog.form_mut().unwrap();
        form.set_format(ArchiveFormat::store("JKS"));
        form.select_file(&b"not really a key store"[..], "old.jks");
        form.select_file(&b"-----BEGIN CERTIFICATE-----"[..], "client.pem");
    }

    assert_eq!(dialog.confirm(), ConfirmOutcome::Confirmed);
    let config = &dialog.callbacks().saved[0];
    let file = config.imported_file.as_ref().unwrap();
    assert_eq!(file.filename(), "client.pem");
    assert_eq!(&file.content()[..], b"-----BEGIN CERTIFICATE-----");
    assert_eq!(config.archive_filename(), Some("keystore.jks".to_string()));
}

#[test]
fn every_activation_toggles_once() {
    let mut dialog =
        KeyConfigurationDialog::new("my-client", import_mode(), advertised(), Host::default());

    for round in 1..=3 {
        let _ = dialog.open();
        let _ = dialog.open();
        if round % 2 == 0 {
            let _ = dialog.cancel();
        } else {
            assert_eq!(dialog.confirm(), ConfirmOutcome::Confirmed);
        }
        assert_eq!(dialog.callbacks().toggles, round);
    }
    assert_eq!(dialog.callbacks().saved.len(), 2);
}
