use std::io::{self, Write};

use crate::{
    cli_command::{parse_cli_command, DynCommand},
    scripting::Script,
    state::State,
};

/// Runs the interactive client until `quit` or end of input.
pub async fn run(mut state: State) -> anyhow::Result<()> {
    println!("Type \"help\" to view list of commands.");

    while let Some(input) = read_input(&state)? {
        match parse_cli_command(&input) {
            Ok(command) => execute(command, &mut state).await,
            Err(e) => println!("Unable to parse command: {e}"),
        }
    }

    state.storage().flush().await;
    Ok(())
}

/// Runs a script without user input. The first failing command aborts it.
pub async fn run_script(mut state: State, script: Script) -> anyhow::Result<()> {
    script.execute(&mut state).await?;
    state.storage().flush().await;

    println!();
    println!("Script completed successfully");
    Ok(())
}

async fn execute(command: DynCommand, state: &mut State) {
    if let Err(e) = command.execute(state).await {
        println!("Error: {e}");
    }
}

/// Reads the next line from standard input, or `None` at end of input.
fn read_input(state: &State) -> anyhow::Result<Option<String>> {
    if state.dialog.is_open() {
        print!("generate keys> ");
    } else {
        print!("> ");
    }
    // Flush stdout so the prompt actually get printed
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}
