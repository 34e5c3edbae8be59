use anyhow::Result;
use std::{path::Path, str::FromStr};

use crate::{
    cli_command::{parse_cli_command, DynCommand},
    state::State,
};

/// A sequence of commands that can be executed without user input.
#[derive(Debug)]
pub struct Script(Vec<DynCommand>);

impl Script {
    /// Execute all of the commands in the script in sequence.
    pub async fn execute(self, state: &mut State) -> Result<()> {
        for command in self.0 {
            command.execute(state).await?;
        }
        Ok(())
    }

    /// Parse a script from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let script_string = std::fs::read_to_string(path)?;
        script_string.parse()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for Script {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Trim whitespace, drop empty lines and comments
        s.split(|c: char| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(parse_cli_command)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystore_config::config::Config;

    #[test]
    fn parses_semicolons_and_lines() {
        let script: Script = "open; alias client-key\n# comment\n\nstatus;confirm"
            .parse()
            .unwrap();
        assert_eq!(script.len(), 4);
    }

    #[test]
    fn unknown_command_fails_the_whole_script() {
        assert!("open; frobnicate; confirm".parse::<Script>().is_err());
    }

    #[tokio::test]
    async fn runs_the_generate_scenario() {
        let output = std::env::temp_dir().join("keystore-config-cli-script-test");
        let mut config = Config::for_client("my-client");
        config.supported_keystore_types = vec!["PKCS12".to_string()];
        let mut state = State::new(config, &output).unwrap();

        let script: Script = "open; alias client-key; key-password a; store-password b; confirm"
            .parse()
            .unwrap();
        script.execute(&mut state).await.unwrap();
        assert!(!state.dialog.is_open());

        let written = state.storage().flush().await;
        assert_eq!(written.len(), 1);
        let json = std::fs::read_to_string(&written[0]).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(saved["format"], "PKCS12");
        assert_eq!(saved["keyAlias"], "client-key");
    }

    #[tokio::test]
    async fn incomplete_confirm_fails_the_script() {
        let output = std::env::temp_dir().join("keystore-config-cli-script-test-incomplete");
        let mut config = Config::for_client("my-client");
        config.supported_keystore_types = vec!["JKS".to_string()];
        let mut state = State::new(config, &output).unwrap();

        let script: Script = "open; confirm".parse().unwrap();
        assert!(script.execute(&mut state).await.is_err());
        assert!(state.dialog.is_open());
        assert!(state.storage().flush().await.is_empty());
    }
}
