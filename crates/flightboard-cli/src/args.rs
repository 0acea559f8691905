use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::RunArgs;

/// Simulated airport departures board
///
/// Flights are fed to the board on a fixed period and advance through
/// DEPARTING, ON_TIME, DELAYED and ARRIVED before leaving the board. Every
/// change redraws the whole board, sorted by scheduled date and time.
#[derive(Parser)]
#[command(version, about, name = "fboard")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/flightboard/config.json when it exists
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the flightboard CLI
///
/// Running without a command starts the simulation with the configured
/// defaults.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the simulation
    #[command(alias = "r")]
    Run(RunArgs),
    /// List the flight template pool
    #[command(alias = "t")]
    Templates,
    /// Print the effective configuration as JSON
    Config,
}
