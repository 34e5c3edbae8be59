mod app;
mod cli;
mod cli_command;
mod scripting;
mod state;
mod storage;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{scripting::Script, state::State};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.workflow_config()?;

    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();
    info!("Starting key store configuration CLI");

    let mut state = State::new(config, &cli.output)?;
    if let Some(server_info) = &cli.server_info {
        state.load_server_info(server_info).await?;
    }

    if let Some(script_file) = &cli.script_file {
        app::run_script(state, Script::from_file(script_file)?).await
    } else if let Some(script) = &cli.script {
        app::run_script(state, script.parse()?).await
    } else {
        app::run(state).await
    }
}
