use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use keystore_config::infrastructure::sensitive_info::SensitiveString;

#[derive(Debug)]
pub struct StorePassword {
    password: SensitiveString,
}

#[async_trait]
impl CliCommand for StorePassword {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let Self { password } = *self;
        state.form_mut()?.set_store_password(password);
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(StorePassword {
                password: SensitiveString::default(),
            }),
            [password] => Some(StorePassword {
                password: SensitiveString::new(*password),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "store-password [password (Optional)]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["store-password", "sp"]
    }

    fn description() -> &'static str {
        "Sets the password protecting the key store. Not asked for when the
             passwords come with an imported file."
    }
}
