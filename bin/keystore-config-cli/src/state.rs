use anyhow::anyhow;
use keystore_config::{
    config::{AuthorizationSpec, Config},
    format::ServerInfo,
    labels::LabelCatalog,
    KeyConfigurationDialog, KeyConfigurationForm,
};
use std::path::Path;
use tracing::info;

use crate::storage::ConfigWriter;

pub struct State {
    pub dialog: KeyConfigurationDialog<ConfigWriter>,
    pub labels: LabelCatalog,
    pub authorization: AuthorizationSpec,
}

impl State {
    pub fn new(config: Config, output_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let storage = ConfigWriter::new(&config.client_id, output_dir)?;
        let labels = config.label_catalog();
        let authorization = config.authorization;
        let dialog = KeyConfigurationDialog::new(
            config.client_id,
            config.mode,
            config.supported_keystore_types,
            storage,
        );

        Ok(Self {
            dialog,
            labels,
            authorization,
        })
    }

    pub fn storage(&mut self) -> &mut ConfigWriter {
        self.dialog.callbacks_mut()
    }

    /// The form of the open dialog.
    pub fn form(&self) -> anyhow::Result<&KeyConfigurationForm> {
        self.dialog.form().ok_or_else(not_open)
    }

    pub fn form_mut(&mut self) -> anyhow::Result<&mut KeyConfigurationForm> {
        self.dialog.form_mut().ok_or_else(not_open)
    }

    /// Deliver server info, as the console does once its request completes.
    pub async fn load_server_info(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = tokio::fs::read_to_string(path).await?;
        let server_info: ServerInfo = json.parse()?;
        self.dialog.on_server_info_loaded(&server_info);
        info!(
            "Server info loaded. Supported key-store types: {:?}",
            server_info.supported_keystore_types()
        );
        Ok(())
    }
}

fn not_open() -> anyhow::Error {
    anyhow!("The dialog is not open. Type \"open\" first.")
}
