//! Flight entity definition.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{FlightRecord, FlightStatus, ScheduleKey};

/// Board-issued identity of a live flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub u64);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One live flight on the board.
#[derive(Debug, Clone)]
pub struct Flight {
    /// Identity, unique for the board's lifetime
    pub id: FlightId,

    /// Attributes the flight was created from
    pub record: FlightRecord,

    /// Composite date+time ordering key
    pub key: ScheduleKey,

    /// Current status
    pub status: FlightStatus,

    /// Creation instant, for diagnostics only
    pub created_at: Timestamp,
}

impl Flight {
    /// Creates a flight in its initial `Departing` status.
    pub fn new(id: FlightId, record: FlightRecord, key: ScheduleKey) -> Self {
        Self {
            id,
            record,
            key,
            status: FlightStatus::Departing,
            created_at: Timestamp::now(),
        }
    }

    /// Moves the status to `target` if that is a legal forward step.
    ///
    /// Returns whether the status changed.
    pub fn advance(&mut self, target: FlightStatus) -> bool {
        if self.status.can_advance_to(target) {
            self.status = target;
            true
        } else {
            false
        }
    }
}
