//! Reelbox CLI - Command-line interface
//!
//! Builds a bounded storage from the files given on the command line and runs
//! one operation against it.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use reelbox_core::ReelboxError;
use reelbox_core::tracing_setup::init_tracing;

fn main() -> anyhow::Result<ExitCode> {
    let cli = commands::Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref()).map_err(|e| {
        ReelboxError::Configuration {
            reason: format!("tracing setup failed: {e}"),
        }
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match commands::handle_command(cli, &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            tracing::error!(%error, "Command failed");
            eprintln!("{}", error.user_message());
            Ok(ExitCode::from(exit_status_for(&error)))
        }
    }
}

/// Exit status for a failed command: 2 for rejected input, 1 otherwise.
fn exit_status_for(error: &ReelboxError) -> u8 {
    if error.is_user_error() { 2 } else { 1 }
}
