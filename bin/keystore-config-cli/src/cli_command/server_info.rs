use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug)]
pub struct LoadServerInfo {
    path: PathBuf,
}

#[async_trait]
impl CliCommand for LoadServerInfo {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        state.load_server_info(&self.path).await
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [path] => Some(LoadServerInfo {
                path: PathBuf::from(path),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "server-info [file_path]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["server-info", "si"]
    }

    fn description() -> &'static str {
        "Loads a server info JSON document and offers its supported
             key-store types. An open form keeps its format if it is
             still offered."
    }
}
