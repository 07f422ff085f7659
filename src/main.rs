use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::error::CliError;

mod cli;
mod commands;
mod config;
mod error;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Directions {
            map,
            from,
            to,
            output,
        } => commands::directions(&config, &map, &from, &to, &output),
        Command::Mst { map, output } => commands::mst(&config, &map, &output),
        Command::Show { map, geojson } => commands::show(&config, &map, &geojson),
        Command::Info { map, json } => commands::info(&config, &map, json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
