use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use keystore_config::dialog::CancelOutcome;

#[derive(Debug)]
pub struct Cancel {}

#[async_trait]
impl CliCommand for Cancel {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        if state.dialog.cancel() == CancelOutcome::NotOpen {
            println!("The dialog is not open.");
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Cancel {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "cancel"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["cancel", "c"]
    }

    fn description() -> &'static str {
        "Closes the dialog and discards the form. Nothing is saved."
    }
}
