use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;

#[derive(Debug)]
pub struct ClearImport {}

#[async_trait]
impl CliCommand for ClearImport {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        state.form_mut()?.clear_file();
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(ClearImport {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "clear-import"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["clear-import", "ci"]
    }

    fn description() -> &'static str {
        "Clears the selected import file."
    }
}
