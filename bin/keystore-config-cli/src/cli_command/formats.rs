use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use keystore_config::{constants::labels, labels::LabelLookup};

#[derive(Debug)]
pub struct Formats {}

#[async_trait]
impl CliCommand for Formats {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let offered = match state.dialog.form() {
            Some(form) => form.offered_formats().to_vec(),
            None => state.dialog.registry().offered(),
        };
        if offered.is_empty() {
            println!("No formats offered yet. Load server info with \"server-info\".");
        }

        println!("{}", state.labels.label(labels::ARCHIVE_FORMAT_HELP));
        let selected = state.dialog.form().and_then(|form| form.format());
        for format in &offered {
            let marker = if Some(format) == selected { "*" } else { " " };
            match format.archive_filename() {
                Some(archive) => println!("{marker} {format} ({archive})"),
                None => println!("{marker} {format}"),
            }
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Formats {}),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "formats"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["formats", "fs"]
    }

    fn description() -> &'static str {
        "Lists the archive formats that can be selected. The selected
             format is marked with *."
    }
}
