//! Flight attributes as supplied by a generator or caller.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Descriptive attributes of one scheduled flight.
///
/// This is the shape templates are written in and the input to
/// [`Board::add`](crate::board::Board::add).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FlightRecord {
    /// Scheduled date, `DD-MM`
    pub date: String,

    /// Scheduled time, `HH:MM`
    pub time: String,

    /// Destination (departures) or origin (arrivals)
    pub destination: String,

    /// Flight number, e.g. `FR5902`
    pub flight_number: String,

    /// Free-text notes shown on the board
    #[serde(default)]
    pub notes: String,

    /// Aircraft type code
    #[serde(default)]
    pub aircraft: String,

    /// Gate or check-in designator
    #[serde(default)]
    pub gate: String,
}

impl FlightRecord {
    /// Checks that every required field is present.
    ///
    /// Only presence is checked here; the schedule format is enforced when
    /// the sort key is derived.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` for the first blank required field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("date", &self.date),
            ("time", &self.time),
            ("destination", &self.destination),
            ("flight_number", &self.flight_number),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BoardError::invalid_input(field).with_reason("must not be empty"));
            }
        }
        Ok(())
    }
}
