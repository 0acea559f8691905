//! Shared tick for the lock-step discipline.
//!
//! There are no per-flight timers here: every live flight moves exactly one
//! step per tick, with no branching,
//! `DEPARTING -> ON_TIME -> DELAYED -> ARRIVED -> removed`.

use log::debug;

use super::Board;
use crate::{
    config::Discipline,
    error::{BoardError, Result},
    models::FlightId,
};

/// What a single tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Flights that moved to their next status
    pub advanced: Vec<FlightId>,
    /// Flights that were `ARRIVED` and left the board
    pub removed: Vec<FlightId>,
}

impl Board {
    /// Advances every live flight one step and renders once.
    ///
    /// Flights already `ARRIVED` are removed in the same step.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` on a board using the independent
    /// discipline, whose flights run on their own timers.
    pub async fn tick(&self) -> Result<TickReport> {
        if self.state.config.discipline != Discipline::Lockstep {
            return Err(BoardError::configuration(
                "tick is only available under the lockstep discipline",
            ));
        }

        let mut report = TickReport::default();
        let mut flights = self.state.flights.lock().await;
        flights.retain_mut(|flight| match flight.status.next_lockstep() {
            Some(next) => {
                flight.advance(next);
                report.advanced.push(flight.id);
                true
            }
            None => {
                report.removed.push(flight.id);
                false
            }
        });
        self.state.render_locked(&mut flights);

        debug!(
            "Tick advanced {} flights and removed {}",
            report.advanced.len(),
            report.removed.len()
        );
        Ok(report)
    }
}
