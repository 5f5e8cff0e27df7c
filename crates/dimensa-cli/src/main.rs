mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "dimensa=debug,dimensa_core=debug"
    } else {
        "dimensa=info,dimensa_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match commands::run(&cli).and_then(|value| emit(cli.output, &value)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            e.exit_code()
        }
    }
}

/// Strings (rendered TOML) are printed verbatim.
fn emit(format: OutputFormat, value: &serde_json::Value) -> error::Result<()> {
    match (format, value) {
        (_, serde_json::Value::String(text)) => print!("{text}"),
        (OutputFormat::Json, _) => println!("{}", serde_json::to_string(value)?),
        (OutputFormat::Pretty, _) => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
