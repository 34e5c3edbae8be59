pub mod cancel;
pub mod clear_import;
pub mod confirm;
pub mod format;
pub mod formats;
pub mod help;
pub mod import;
pub mod key_alias;
pub mod key_password;
pub mod open;
pub mod permissions;
pub mod quit;
pub mod realm_certificate;
pub mod server_info;
pub mod status;
pub mod store_password;

pub use cancel::Cancel;
pub use clear_import::ClearImport;
pub use confirm::Confirm;
pub use format::Format;
pub use formats::Formats;
pub use help::Help;
pub use import::Import;
pub use key_alias::KeyAlias;
pub use key_password::KeyPassword;
pub use open::Open;
pub use permissions::Permissions;
pub use quit::Quit;
pub use realm_certificate::RealmCertificate;
pub use server_info::LoadServerInfo;
pub use status::Status;
pub use store_password::StorePassword;

use crate::state::State;
use anyhow::{anyhow, bail};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{debug, info};

pub type DynCommand = Box<dyn CliCommand>;

#[async_trait]
pub trait CliCommand: Debug {
    /// Execute the command against the current dialog state.
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), anyhow::Error>;

    /// Given the proper string arguments to a command, return an instance of
    /// this command.
    fn parse_command_args(args: &[&str]) -> Option<Self>
    where
        Self: Sized;

    /// Expected format for this command such as "alias \[key_alias\]".
    /// Used for generating help string dynamically.
    fn format() -> &'static str
    where
        Self: Sized;

    fn aliases() -> Vec<&'static str>
    where
        Self: Sized;

    fn description() -> &'static str
    where
        Self: Sized;

    /// Convert a string into a `Box<dyn Command>` suitable for dynamically
    /// dispatching the execute function.
    fn to_dyn(self) -> DynCommand
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    fn from_str(s: &str) -> Result<Self, anyhow::Error>
    where
        Self: Sized,
    {
        let mut split = s.split_whitespace();

        let command = split
            .next()
            .ok_or_else(|| anyhow!("Missing \"command\" part of argument."))?;
        debug!("Looking for match for \"{}\"", command);

        // Check if this command matches any of our aliases. Otherwise return.
        // We do this check here to avoid doing it inside every
        // `CliCommand::parse_command_args` function.
        if !Self::aliases().contains(&command) {
            bail!("Command does not match any know name or alias.");
        }
        info!("Found valid command: {}", command);

        match Self::parse_command_args(&split.collect::<Vec<_>>()) {
            Some(t) => Ok(t),
            None => bail!("Expected Format: {}", Self::format()),
        }
    }
}

// Iterate through our registered commands and see if any of them can parse this
// command.
pub fn parse_cli_command(input: &str) -> Result<DynCommand, anyhow::Error> {
    let input = input.trim();
    debug!("Attempting to parse user input string: {}", input);

    let mut last_error = anyhow!("No matching command.");
    for cmd_parse in get_cmd_functions::<Parse>() {
        match cmd_parse(input) {
            Ok(c) => return Ok(c),
            // Keep the format hint of a command that matched by name.
            Err(e) if e.to_string().starts_with("Expected Format") => last_error = e,
            Err(_) => {}
        }
    }

    Err(last_error)
}

/// Helper type to implement [GetCmdFunction]. This returns the parsing
/// function for all commands and allows the [parse_cli_command] to iterate
/// through these functions.
struct Parse;

impl GetCmdFunction for Parse {
    type FunctionSignature = fn(&str) -> Result<DynCommand, anyhow::Error>;

    fn get_function<T: CliCommand + 'static>() -> Self::FunctionSignature {
        |s| T::from_str(s).map(|c| c.to_dyn())
    }
}

/// Returns the analogous function for every command, e.g. the parsing
/// function of each implementor of [CliCommand]. Which function is fetched is
/// chosen by the [GetCmdFunction] implementor.
///
/// If you want to add a new command to this CLI please specify your command
/// here! The rest of the code will know how to use it.
pub fn get_cmd_functions<F: GetCmdFunction>() -> Vec<F::FunctionSignature> {
    vec![
        F::get_function::<Cancel>(),
        F::get_function::<ClearImport>(),
        F::get_function::<Confirm>(),
        F::get_function::<Format>(),
        F::get_function::<Formats>(),
        F::get_function::<Help>(),
        F::get_function::<Import>(),
        F::get_function::<KeyAlias>(),
        F::get_function::<KeyPassword>(),
        F::get_function::<LoadServerInfo>(),
        F::get_function::<Open>(),
        F::get_function::<Permissions>(),
        F::get_function::<Quit>(),
        F::get_function::<RealmCertificate>(),
        F::get_function::<Status>(),
        F::get_function::<StorePassword>(),
    ]
}

/// Maps Self -> get_function<T: CliCommand>, so a vector of functions can be
/// generated with one entry per type that implements [CliCommand]. See
/// [get_cmd_functions] for how this is used.
pub trait GetCmdFunction {
    /// The signature of the function this implementor will be returning.
    type FunctionSignature;
    /// Given a specific implementor of CliCommand, T, return the correct
    /// function implementation for that type.
    fn get_function<T: CliCommand + 'static>() -> Self::FunctionSignature;
}
