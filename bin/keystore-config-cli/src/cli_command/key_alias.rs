use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;

#[derive(Debug)]
pub struct KeyAlias {
    alias: String,
}

#[async_trait]
impl CliCommand for KeyAlias {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        state.form_mut()?.set_key_alias(self.alias);
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            // No argument clears the alias.
            [] => Some(KeyAlias {
                alias: String::new(),
            }),
            [alias] => Some(KeyAlias {
                alias: alias.to_string(),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "alias [key_alias (Optional)]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["alias", "a"]
    }

    fn description() -> &'static str {
        "Sets the alias of the key inside the store. Clears it if no alias
             is given."
    }
}
