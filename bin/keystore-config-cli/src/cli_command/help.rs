use crate::{
    cli_command::{get_cmd_functions, CliCommand, GetCmdFunction},
    state::State,
};
use anyhow::Error;
use async_trait::async_trait;
use colored::Colorize;
use std::fmt::{self, Display, Formatter};
use tracing::debug;

/// Usage of one registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Usage {
    format: &'static str,
    aliases: Vec<&'static str>,
    description: &'static str,
}

impl Usage {
    fn of<T: CliCommand>() -> Self {
        Self {
            format: T::format(),
            aliases: T::aliases(),
            description: T::description(),
        }
    }

    fn answers_to(&self, name: &str) -> bool {
        self.aliases.contains(&name)
    }
}

impl Display for Usage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  ({})", self.format.bold(), self.aliases.join(", "))?;
        // Descriptions are wrapped in source with a deep indent.
        for line in self.description.lines() {
            writeln!(f, "    {}", line.trim())?;
        }
        Ok(())
    }
}

struct UsageOf;

impl GetCmdFunction for UsageOf {
    type FunctionSignature = fn() -> Usage;

    fn get_function<T: CliCommand + 'static>() -> Self::FunctionSignature {
        Usage::of::<T>
    }
}

fn all_usages() -> impl Iterator<Item = Usage> {
    get_cmd_functions::<UsageOf>().into_iter().map(|usage| usage())
}

#[derive(Debug)]
pub struct Help {
    text: String,
}

#[async_trait]
impl CliCommand for Help {
    async fn execute(self: Box<Self>, _state: &mut State) -> Result<(), Error> {
        println!("{}", self.text);
        Ok(())
    }

    fn parse_command_args(args: &[&str]) -> Option<Self> {
        debug!("Looking up help for {:?}", args);
        let text = match args {
            [] => all_usages()
                .map(|usage| usage.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            [name] => all_usages().find(|usage| usage.answers_to(name))?.to_string(),
            _ => return None,
        };
        Some(Help { text })
    }

    fn format() -> &'static str {
        "help [command (Optional)]"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["help", "h"]
    }

    fn description() -> &'static str {
        "Shows how to use a command, given any of its names. Without a command,
             lists every command the dialog understands."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_for_a_single_command() {
        let help = Help::parse_command_args(&["generate"]).unwrap();
        assert!(help.text.contains("confirm"));
        assert!(Help::parse_command_args(&["unknown"]).is_none());
        assert!(Help::parse_command_args(&["open", "extra"]).is_none());
    }

    #[test]
    fn full_help_lists_every_command() {
        let help = Help::parse_command_args(&[]).unwrap();
        for usage in all_usages() {
            assert!(help.text.contains(usage.aliases[0]));
        }
        // Source indentation does not leak into the output.
        assert!(!help.text.contains("             "));
    }
}
