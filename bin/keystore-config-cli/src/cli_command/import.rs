use crate::{cli_command::CliCommand, state::State};
use anyhow::{anyhow, Error};
use async_trait::async_trait;
use keystore_config::Field;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct Import {
    path: PathBuf,
}

#[async_trait]
impl CliCommand for Import {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        if !state.form()?.visible_fields().contains(Field::ImportFile) {
            return Err(anyhow!("This dialog does not accept an imported file."));
        }

        let content = tokio::fs::read(&self.path).await?;
        let display_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        info!("Selected {} ({} bytes)", display_name, content.len());

        state.form_mut()?.select_file(content, display_name);
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => None,
            words => Some(Import {
                path: PathBuf::from(words.join(" ")),
            }),
        }
    }

    fn format() -> &'static str {
        "import [file_path]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["import", "i"]
    }

    fn description() -> &'static str {
        "Selects a file to import along with the configuration. Replaces
             any previously selected file. The file is not inspected."
    }
}
