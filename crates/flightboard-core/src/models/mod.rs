//! Data models for flights on the board.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data
//! structures and the transition rules.
//!
//! # Status lifecycle
//!
//! ```text
//! DEPARTING ──▶ ON_TIME ──┬──▶ DELAYED ──▶ ARRIVED ──▶ (removed)
//!                         └──────────────▶ ARRIVED ──▶ (removed)
//! ```
//!
//! [`FlightStatus::can_advance_to`] encodes exactly these edges, so a flight
//! can never regress or skip a step.
//!
//! # Examples
//!
//! ```rust
//! use flightboard_core::models::{Flight, FlightId, FlightRecord, FlightStatus, ScheduleKey};
//!
//! let record = FlightRecord {
//!     date: "13-04".to_string(),
//!     time: "14:25".to_string(),
//!     destination: "MANCHESTER".to_string(),
//!     flight_number: "LS936".to_string(),
//!     ..Default::default()
//! };
//! let key = ScheduleKey::parse(&record.date, &record.time, 2025).unwrap();
//! let mut flight = Flight::new(FlightId(1), record, key);
//!
//! assert!(!flight.advance(FlightStatus::Arrived));
//! assert!(flight.advance(FlightStatus::OnTime));
//! assert_eq!(flight.status, FlightStatus::OnTime);
//! ```

pub mod flight;
pub mod record;
pub mod schedule;
pub mod status;
pub mod view;


pub use flight::{Flight, FlightId};
pub use record::FlightRecord;
pub use schedule::{ScheduleKey, DEFAULT_ANCHOR_YEAR};
pub use status::FlightStatus;
pub use view::FlightView;
