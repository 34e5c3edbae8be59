//! Command-line arguments

use anyhow::anyhow;
use clap::Parser;
use keystore_config::config::Config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Cli {
    /// Location of the workflow config file.
    /// If this arg is not provided, the `client-id` arg must be provided.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Client the keys are generated for. Overrides the config file.
    #[clap(long, required_unless_present = "config")]
    pub client_id: Option<String>,
    /// Server info JSON to load the supported key-store types from.
    #[clap(long)]
    pub server_info: Option<PathBuf>,

    /// Directory where confirmed configurations will be saved.
    #[clap(long, default_value = "dev/keystore_config_data")]
    pub output: PathBuf,
    /// Path to a script file containing a sequence of CLI commands
    #[clap(long = "script-file", conflicts_with = "script")]
    pub script_file: Option<PathBuf>,
    /// Sequence of CLI commands separated by a semicolon or newline
    #[clap(long, conflicts_with = "script-file")]
    pub script: Option<String>,
}

impl Cli {
    pub fn workflow_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => {
                let client_id = self.client_id.as_ref().ok_or(anyhow!(
                    "If `config` argument is not provided, `client-id` must be provided"
                ))?;
                Config::for_client(client_id)
            }
        };

        if let Some(client_id) = &self.client_id {
            config.client_id = client_id.clone();
        }
        Ok(config)
    }
}
