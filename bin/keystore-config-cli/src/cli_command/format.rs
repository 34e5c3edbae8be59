use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;

#[derive(Debug)]
pub struct Format {
    id: String,
}

#[async_trait]
impl CliCommand for Format {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        // Only offered formats reach the form, like a select box.
        let format = state.dialog.registry().resolve(&self.id)?;
        state.form_mut()?.set_format(format);
        println!("Archive format: {}", self.id);
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => None,
            // "Certificate PEM" contains a space.
            words => Some(Format {
                id: words.join(" "),
            }),
        }
    }

    fn format() -> &'static str {
        "format [archive_format]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["format", "f"]
    }

    fn description() -> &'static str {
        "Selects the archive format of the key store. Only the formats
             listed by \"formats\" are accepted."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_name_survives_parsing() {
        let command = Format::parse_command_args(&["Certificate", "PEM"]).unwrap();
        assert_eq!(command.id, "Certificate PEM");
        assert!(Format::parse_command_args(&[]).is_none());
    }
}
