//! Flightboard CLI Application
//!
//! Command-line front end for the departures board simulation.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, RunArgs};
use flightboard_core::BoardConfig;
use log::info;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { config_file, no_color, command } = Args::parse();

    let config = BoardConfig::load(config_file.as_deref())
        .context("Failed to load configuration")?;

    info!("Flightboard started");

    let cli = Cli::new(config, no_color);
    match command {
        Some(Run(args)) => cli.run(args).await,
        Some(Templates) => cli.templates(),
        Some(Config) => cli.config(),
        None => cli.run(RunArgs::default()).await,
    }
}
