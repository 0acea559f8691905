//! Display formatting for the board.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the ordered board is wrapped in [`BoardView`], which is also the record
//! handed to render sinks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Live flights   │    │    BoardView    │    │   Render sink   │
//! │ (sorted by key) │───▶│ (FlightView[])  │───▶│ (terminal/JSON) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown so the CLI can render it through termimad or print
//! it as plain text.
//!
//! - [`board`]: the [`BoardView`] collection wrapper
//! - [`status`]: end-of-run summary ([`RunSummary`])
//! - [`datetime`]: timestamp formatting ([`LocalDateTime`])
//! - [`models`]: Display implementations for domain models

pub mod board;
pub mod datetime;
pub mod models;
pub mod status;

pub use board::BoardView;
pub use datetime::LocalDateTime;
pub use status::RunSummary;
