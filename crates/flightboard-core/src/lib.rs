//! Core library for the Flightboard departures board simulation.
//!
//! A [`Board`] owns the live flights and keeps a single, consistently sorted
//! view of them. Each flight advances `DEPARTING -> ON_TIME -> {DELAYED ->
//! ARRIVED | ARRIVED}` and leaves the board after a retention interval.
//! Every change is rendered exactly once to a [`RenderSink`].
//!
//! # Timing disciplines
//!
//! - [`Discipline::Independent`] (default): every flight runs its own timers
//!   from the moment it is added, with a single coin flip deciding whether
//!   it is delayed.
//! - [`Discipline::Lockstep`]: all flights move one step per shared tick,
//!   with no branching.
//!
//! A board uses exactly one discipline for its whole life.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use flightboard_core::{BoardBuilder, BoardConfig, BoardView, FlightGenerator, Simulation};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BoardConfig::load(None)?;
//! let board = BoardBuilder::new()
//!     .with_config(config.clone())
//!     .with_sink(Arc::new(|view: &BoardView| print!("{view}")))
//!     .build()?;
//!
//! let mut simulation = Simulation::new(board, FlightGenerator::new(&config, None));
//! simulation
//!     .run_until(tokio::time::sleep(std::time::Duration::from_secs(60)))
//!     .await;
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod simulation;

// Re-export commonly used types
pub use board::{Board, BoardBuilder, NullSink, RenderSink, TickReport};
pub use config::{BoardConfig, Discipline, Source, Timings};
pub use display::{BoardView, LocalDateTime, RunSummary};
pub use error::{BoardError, Result};
pub use generator::{default_templates, FlightGenerator};
pub use models::{FlightId, FlightRecord, FlightStatus, FlightView, ScheduleKey};
pub use simulation::Simulation;
