//! The board: authoritative owner of the live flights.
//!
//! A [`Board`] is a cheap-to-clone handle onto shared state. Every mutation
//! (add, remove, status transition, lock-step tick) and the render it
//! triggers run inside one critical section on the flight collection, so a
//! [`RenderSink`] never observes a half-updated board no matter how the
//! flights' timers interleave.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Generator    │    │      Board      │    │   Render sink   │
//! │ (FlightRecord)  │───▶│ add / remove /  │───▶│   (BoardView)   │
//! │                 │    │ transition/tick │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                               ▲      │
//!                               │      ▼ spawn (independent discipline)
//!                        ┌─────────────────┐
//!                        │ Flight timeline │
//!                        │ (Weak → board)  │
//!                        └─────────────────┘
//! ```
//!
//! # Submodules
//!
//! - [`builder`]: [`BoardBuilder`] for configuring a board
//! - [`lifecycle`]: per-flight timers for [`Discipline::Independent`]
//! - [`lockstep`]: the shared tick for [`Discipline::Lockstep`]
//!
//! # Example
//!
//! ```rust
//! use flightboard_core::{BoardBuilder, FlightRecord};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let board = BoardBuilder::new().build()?;
//!
//! let id = board
//!     .add(FlightRecord {
//!         date: "13-04".to_string(),
//!         time: "14:25".to_string(),
//!         destination: "MANCHESTER".to_string(),
//!         flight_number: "LS936".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let view = board.render().await;
//! assert_eq!(view[0].id, id);
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::{debug, info};
use rand::{rngs::StdRng, Rng};
use tokio::sync::Mutex;

pub mod builder;
pub mod lifecycle;
pub mod lockstep;


pub use builder::BoardBuilder;
pub use lockstep::TickReport;

use crate::{
    config::{BoardConfig, Discipline},
    display::BoardView,
    error::Result,
    models::{Flight, FlightId, FlightRecord, FlightStatus, FlightView, ScheduleKey},
};

/// Consumer of rendered board views.
///
/// Called from inside the board's critical section with the complete, ordered
/// view after every change. Implementations must not call back into the
/// board.
pub trait RenderSink: Send + Sync {
    fn render(&self, view: &BoardView);
}

impl<F> RenderSink for F
where
    F: Fn(&BoardView) + Send + Sync,
{
    fn render(&self, view: &BoardView) {
        self(view)
    }
}

/// Sink that discards every view.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&self, _view: &BoardView) {}
}

pub(crate) struct BoardState {
    pub(crate) flights: Mutex<Vec<Flight>>,
    pub(crate) config: BoardConfig,
    sink: Arc<dyn RenderSink>,
    next_id: AtomicU64,
    rng: Mutex<StdRng>,
}

impl BoardState {
    /// Sorts `flights` in place and hands the resulting view to the sink.
    ///
    /// Must be called with the collection lock held. The sort is stable, so
    /// flights sharing a slot keep their insertion order and repeated calls
    /// without a mutation in between produce the same view.
    pub(crate) fn render_locked(&self, flights: &mut [Flight]) -> BoardView {
        let view = ordered_view(flights);
        self.sink.render(&view);
        view
    }
}

fn ordered_view(flights: &mut [Flight]) -> BoardView {
    flights.sort_by_key(|flight| flight.key);
    BoardView(flights.iter().map(FlightView::from).collect())
}

/// Handle onto a live board. Clones share the same flights.
#[derive(Clone)]
pub struct Board {
    pub(crate) state: Arc<BoardState>,
}

impl Board {
    pub(crate) fn new(config: BoardConfig, sink: Arc<dyn RenderSink>, rng: StdRng) -> Self {
        Self {
            state: Arc::new(BoardState {
                flights: Mutex::new(Vec::new()),
                config,
                sink,
                next_id: AtomicU64::new(1),
                rng: Mutex::new(rng),
            }),
        }
    }

    /// The configuration the board was built with.
    pub fn config(&self) -> &BoardConfig {
        &self.state.config
    }

    /// Adds a flight and renders.
    ///
    /// Under [`Discipline::Independent`] this also starts the flight's own
    /// timeline, measured from this moment.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` if a required field is blank or the
    /// date/time cannot be turned into a sort key. The board is left
    /// untouched and no render happens.
    pub async fn add(&self, record: FlightRecord) -> Result<FlightId> {
        record.validate()?;
        let key = ScheduleKey::parse(&record.date, &record.time, self.state.config.anchor_year)?;
        let id = FlightId(self.state.next_id.fetch_add(1, Ordering::Relaxed));
        let label = format!("{} {} {}", record.flight_number, record.date, record.time);

        {
            let mut flights = self.state.flights.lock().await;
            flights.push(Flight::new(id, record, key));
            self.state.render_locked(&mut flights);
        }
        info!("Added flight {id} ({label})");

        if self.state.config.discipline == Discipline::Independent {
            lifecycle::spawn(Arc::downgrade(&self.state), id, self.state.config.timings);
        }

        Ok(id)
    }

    /// Removes the flight with `id` and renders.
    ///
    /// Removing an absent identity is a silent no-op: nothing changes, no
    /// render happens, and `false` is returned.
    pub async fn remove(&self, id: FlightId) -> bool {
        let mut flights = self.state.flights.lock().await;
        let Some(position) = flights.iter().position(|flight| flight.id == id) else {
            debug!("Flight {id} already gone, ignoring removal");
            return false;
        };
        let removed = flights.remove(position);
        self.state.render_locked(&mut flights);
        info!("Removed flight {id}, on the board since {}", removed.created_at);
        true
    }

    /// Sorts the live flights and hands the view to the render sink.
    pub async fn render(&self) -> BoardView {
        let mut flights = self.state.flights.lock().await;
        self.state.render_locked(&mut flights)
    }

    /// The ordered view, without notifying the render sink.
    pub async fn snapshot(&self) -> BoardView {
        let mut flights = self.state.flights.lock().await.clone();
        ordered_view(&mut flights)
    }

    /// Current status of a live flight.
    pub async fn status_of(&self, id: FlightId) -> Option<FlightStatus> {
        let flights = self.state.flights.lock().await;
        flights.iter().find(|flight| flight.id == id).map(|flight| flight.status)
    }

    /// Whether the flight is still on the board.
    pub async fn contains(&self, id: FlightId) -> bool {
        self.status_of(id).await.is_some()
    }

    /// Number of live flights.
    pub async fn len(&self) -> usize {
        self.state.flights.lock().await.len()
    }

    /// Whether the board has no live flights.
    pub async fn is_empty(&self) -> bool {
        self.state.flights.lock().await.is_empty()
    }

    /// Moves flight `id` from `from` to `to` and renders.
    ///
    /// Returns `false` without rendering if the flight is no longer live or
    /// is not currently in `from`; a timeline that sees `false` must stop.
    pub(crate) async fn transition(&self, id: FlightId, from: FlightStatus, to: FlightStatus) -> bool {
        let mut flights = self.state.flights.lock().await;
        let Some(flight) = flights.iter_mut().find(|flight| flight.id == id) else {
            debug!("Flight {id} no longer live, dropping {from} -> {to}");
            return false;
        };
        if flight.status != from || !flight.advance(to) {
            debug!("Flight {id} is {}, dropping {from} -> {to}", flight.status);
            return false;
        }
        debug!("Flight {id}: {from} -> {to}");
        self.state.render_locked(&mut flights);
        if to.is_terminal() {
            info!("Flight {id} arrived, leaving after {:?}", self.state.config.timings.retention());
        }
        true
    }

    /// One coin flip for the `ON_TIME` branch: `true` means `DELAYED`.
    pub(crate) async fn flip_delay(&self) -> bool {
        let p = self.state.config.delay_probability;
        self.state.rng.lock().await.gen_bool(p)
    }
}
