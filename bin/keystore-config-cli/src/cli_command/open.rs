use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use keystore_config::{constants::labels, dialog::OpenOutcome, labels::LabelLookup};

#[derive(Debug)]
pub struct Open {}

#[async_trait]
impl CliCommand for Open {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        match state.dialog.open() {
            OpenOutcome::Opened => {
                println!("{}", state.labels.label(labels::GENERATE_KEYS));
                println!("{}", state.labels.label(labels::GENERATE_KEYS_DESCRIPTION));
            }
            OpenOutcome::AlreadyOpen => println!("Dialog is already open."),
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Open {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "open"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["open", "o"]
    }

    fn description() -> &'static str {
        "Opens the generate keys dialog with a fresh form. The key alias
             defaults to the client id. Does nothing if the dialog is
             already open."
    }
}
