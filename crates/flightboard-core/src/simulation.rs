//! Periodic driver feeding generated flights to the board.
//!
//! Under the independent discipline the simulation only feeds the board; each
//! flight then runs its own timeline. Under the lock-step discipline each
//! period first ticks the board, then adds the new flight.

use std::future::Future;

use log::{info, warn};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::{
    board::Board,
    config::Discipline,
    display::RunSummary,
    generator::FlightGenerator,
    models::FlightId,
};

/// A board together with the generator that feeds it.
pub struct Simulation {
    board: Board,
    generator: FlightGenerator,
    added: u64,
    rejected: u64,
}

impl Simulation {
    /// Creates a simulation over an existing board.
    pub fn new(board: Board, generator: FlightGenerator) -> Self {
        Self {
            board,
            generator,
            added: 0,
            rejected: 0,
        }
    }

    /// The board being driven.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs one period: a shared tick when lock-stepped, then one new flight.
    ///
    /// Returns the new flight's identity, or `None` if the generated record
    /// was rejected. Rejections are logged and never stop the simulation.
    pub async fn step(&mut self) -> Option<FlightId> {
        if self.board.config().discipline == Discipline::Lockstep {
            if let Err(e) = self.board.tick().await {
                warn!("Tick failed: {e}");
            }
        }

        let record = self.generator.next_record();
        let flight_number = record.flight_number.clone();
        match self.board.add(record).await {
            Ok(id) => {
                self.added += 1;
                Some(id)
            }
            Err(e) => {
                warn!("Skipping generated flight {flight_number}: {e}");
                self.rejected += 1;
                None
            }
        }
    }

    /// Counts so far, with the current number of live flights.
    pub async fn summary(&self) -> RunSummary {
        RunSummary {
            added: self.added,
            rejected: self.rejected,
            remaining: self.board.len().await,
        }
    }

    /// Renders the initial board, then steps once per period until
    /// `shutdown` resolves.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let config = self.board.config();
        let period = match config.discipline {
            Discipline::Independent => config.timings.generator(),
            Discipline::Lockstep => config.timings.tick(),
        };
        info!(
            "Simulation started ({:?} discipline, {:?} source, period {period:?})",
            config.discipline, config.source
        );

        self.board.render().await;

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = ticker.tick() => {
                    self.step().await;
                }
            }
        }

        info!("Simulation stopped with {} flights on the board", self.board.len().await);
    }
}
