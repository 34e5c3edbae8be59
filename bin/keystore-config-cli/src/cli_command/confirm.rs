use crate::{cli_command::CliCommand, state::State};
use anyhow::{bail, Error};
use async_trait::async_trait;
use keystore_config::{capability::Disablement, dialog::ConfirmOutcome};

#[derive(Debug)]
pub struct Confirm {}

#[async_trait]
impl CliCommand for Confirm {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        match state.dialog.confirm() {
            ConfirmOutcome::Confirmed => Ok(()),
            ConfirmOutcome::Rejected { missing } => {
                bail!(
                    "Cannot generate yet. {}",
                    Disablement::Incomplete { missing }.describe(&state.labels)
                )
            }
            ConfirmOutcome::NotOpen => bail!("The dialog is not open."),
        }
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Confirm {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "confirm"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["confirm", "generate", "g"]
    }

    fn description() -> &'static str {
        "Hands the configuration to the save callback and closes the
             dialog. Refused while a required field is empty."
    }
}
