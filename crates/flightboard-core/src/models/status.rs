//! Flight status enumeration and its forward-only transition rules.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of flight statuses, in forward order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    /// Freshly added to the board
    Departing,

    /// Running to schedule
    OnTime,

    /// Held back before arrival
    Delayed,

    /// Terminal status; the flight is removed after the retention interval
    Arrived,
}

impl FlightStatus {
    /// Board label for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Departing => "DEPARTING",
            FlightStatus::OnTime => "ON_TIME",
            FlightStatus::Delayed => "DELAYED",
            FlightStatus::Arrived => "ARRIVED",
        }
    }

    /// Whether this is the terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightStatus::Arrived)
    }

    /// Whether `target` is a legal single step from this status.
    ///
    /// The only branching edge is `OnTime`, which may go to either `Delayed`
    /// or straight to `Arrived`.
    pub fn can_advance_to(&self, target: FlightStatus) -> bool {
        matches!(
            (self, target),
            (FlightStatus::Departing, FlightStatus::OnTime)
                | (FlightStatus::OnTime, FlightStatus::Delayed)
                | (FlightStatus::OnTime, FlightStatus::Arrived)
                | (FlightStatus::Delayed, FlightStatus::Arrived)
        )
    }

    /// Successor under the lock-step discipline, which never branches.
    ///
    /// `None` means the flight leaves the board on this tick.
    pub fn next_lockstep(&self) -> Option<FlightStatus> {
        match self {
            FlightStatus::Departing => Some(FlightStatus::OnTime),
            FlightStatus::OnTime => Some(FlightStatus::Delayed),
            FlightStatus::Delayed => Some(FlightStatus::Arrived),
            FlightStatus::Arrived => None,
        }
    }

    /// Get status with a leading glyph for terminal display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flightboard_core::models::FlightStatus;
    ///
    /// assert_eq!(FlightStatus::Delayed.with_icon(), "! DELAYED");
    /// assert_eq!(FlightStatus::Arrived.with_icon(), "✓ ARRIVED");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            FlightStatus::Departing => "○ DEPARTING",
            FlightStatus::OnTime => "➤ ON_TIME",
            FlightStatus::Delayed => "! DELAYED",
            FlightStatus::Arrived => "✓ ARRIVED",
        }
    }
}
