//! Command arguments and handlers.
//!
//! Argument types stay in this crate and are folded into a
//! [`BoardConfig`] before anything reaches the core library, so the core
//! types carry no clap attributes.

use std::{future::pending, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use flightboard_core::{
    BoardBuilder, BoardConfig, Discipline, FlightGenerator, Simulation, Source,
};
use log::{info, warn};

use crate::renderer::{OutputMode, TerminalRenderer};

/// Run the simulation
///
/// Command-line values override the configuration file for this run only.
#[derive(Args, Default)]
pub struct RunArgs {
    #[arg(short, long, help = "Timing discipline (independent, lockstep)")]
    pub discipline: Option<DisciplineArg>,
    #[arg(short, long, help = "Where new flights come from (templates, random)")]
    pub source: Option<SourceArg>,
    #[arg(long, help = "Seed for a reproducible run")]
    pub seed: Option<u64>,
    #[arg(long, value_name = "SECS", help = "Stop after this many seconds instead of Ctrl-C")]
    pub duration: Option<u64>,
    #[arg(long, help = "Emit each board as one JSON line")]
    pub json: bool,
}

impl RunArgs {
    /// Folds the overrides into `config`.
    pub fn apply(&self, config: &mut BoardConfig) {
        if let Some(discipline) = self.discipline {
            config.discipline = discipline.into();
        }
        if let Some(source) = self.source {
            config.source = source.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

/// Command-line representation of [`Discipline`].
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DisciplineArg {
    /// Every flight runs its own timers
    Independent,
    /// All flights move one step per shared tick
    Lockstep,
}

impl From<DisciplineArg> for Discipline {
    fn from(val: DisciplineArg) -> Self {
        match val {
            DisciplineArg::Independent => Discipline::Independent,
            DisciplineArg::Lockstep => Discipline::Lockstep,
        }
    }
}

/// Command-line representation of [`Source`].
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Pick from the template pool
    Templates,
    /// Synthesise random flights
    Random,
}

impl From<SourceArg> for Source {
    fn from(val: SourceArg) -> Self {
        match val {
            SourceArg::Templates => Source::Templates,
            SourceArg::Random => Source::Random,
        }
    }
}

/// Command handlers over the loaded configuration.
pub struct Cli {
    config: BoardConfig,
    no_color: bool,
}

impl Cli {
    pub fn new(config: BoardConfig, no_color: bool) -> Self {
        Self { config, no_color }
    }

    /// Runs the simulation until the duration elapses or Ctrl-C.
    pub async fn run(&self, args: RunArgs) -> Result<()> {
        let mut config = self.config.clone();
        args.apply(&mut config);

        let mode = match (args.json, self.no_color) {
            (true, _) => OutputMode::Json,
            (false, true) => OutputMode::Plain,
            (false, false) => OutputMode::Rich,
        };
        let renderer = Arc::new(TerminalRenderer::new(mode));

        let board = BoardBuilder::new()
            .with_config(config.clone())
            .with_sink(renderer.clone())
            .build()
            .context("Failed to build board")?;
        let generator = FlightGenerator::new(&config, config.seed);
        let mut simulation = Simulation::new(board, generator);

        simulation
            .run_until(shutdown_signal(args.duration.map(Duration::from_secs)))
            .await;

        if mode != OutputMode::Json {
            renderer.print_markdown(&simulation.summary().await.to_string());
        }
        Ok(())
    }

    /// Lists the templates the generator draws from.
    pub fn templates(&self) -> Result<()> {
        let generator = FlightGenerator::new(&self.config, None);
        let mut output = String::from("# Flight templates\n\n");
        for template in generator.templates() {
            output.push_str(&template.to_string());
        }
        self.renderer().print_markdown(&output);
        Ok(())
    }

    /// Prints the effective configuration.
    pub fn config(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.config)
            .context("Failed to serialize configuration")?;
        println!("{json}");
        Ok(())
    }

    fn renderer(&self) -> TerminalRenderer {
        TerminalRenderer::new(if self.no_color {
            OutputMode::Plain
        } else {
            OutputMode::Rich
        })
    }
}

/// Resolves after `duration`, or on Ctrl-C when no duration is given or it
/// has not yet elapsed.
async fn shutdown_signal(duration: Option<Duration>) {
    let timeout = async {
        match duration {
            Some(duration) => tokio::time::sleep(duration).await,
            None => pending::<()>().await,
        }
    };

    tokio::select! {
        () = timeout => info!("Run duration elapsed"),
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => info!("Interrupted"),
            Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
        },
    }
}
