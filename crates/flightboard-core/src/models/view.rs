//! Render record handed to render sinks.

use serde::{Deserialize, Serialize};

use super::{Flight, FlightId, FlightStatus};

/// Owned, read-only snapshot of one flight as it appears on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightView {
    pub id: FlightId,
    pub date: String,
    pub time: String,
    pub destination: String,
    pub flight_number: String,
    pub notes: String,
    pub aircraft: String,
    pub gate: String,
    pub status: FlightStatus,
}

impl From<&Flight> for FlightView {
    fn from(flight: &Flight) -> Self {
        let record = &flight.record;
        Self {
            id: flight.id,
            date: record.date.clone(),
            time: record.time.clone(),
            destination: record.destination.clone(),
            flight_number: record.flight_number.clone(),
            notes: record.notes.clone(),
            aircraft: record.aircraft.clone(),
            gate: record.gate.clone(),
            status: flight.status,
        }
    }
}
