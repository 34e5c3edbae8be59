use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;

#[derive(Debug)]
pub struct RealmCertificate {
    enabled: bool,
}

#[async_trait]
impl CliCommand for RealmCertificate {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        state.form_mut()?.set_realm_certificate(self.enabled);
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            ["on"] => Some(RealmCertificate { enabled: true }),
            ["off"] => Some(RealmCertificate { enabled: false }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "realm-cert [on|off]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["realm-cert", "rc"]
    }

    fn description() -> &'static str {
        "Includes the realm certificate in the key store. Only shown for
             SAML clients."
    }
}
