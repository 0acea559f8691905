#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use flightboard_core::{
    Board, BoardBuilder, BoardConfig, BoardView, FlightId, FlightRecord, FlightStatus,
    RenderSink, ScheduleKey,
};

/// Sink that keeps every view it is handed.
#[derive(Default)]
pub struct RecordingSink {
    views: Mutex<Vec<BoardView>>,
}

impl RecordingSink {
    pub fn views(&self) -> Vec<BoardView> {
        self.views.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.views.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<BoardView> {
        self.views.lock().unwrap().last().cloned()
    }

    /// Every status flight `id` was rendered with, in render order, with
    /// consecutive repeats collapsed.
    pub fn statuses_of(&self, id: FlightId) -> Vec<FlightStatus> {
        let mut statuses: Vec<FlightStatus> = Vec::new();
        for view in self.views.lock().unwrap().iter() {
            if let Some(flight) = view.iter().find(|flight| flight.id == id) {
                if statuses.last() != Some(&flight.status) {
                    statuses.push(flight.status);
                }
            }
        }
        statuses
    }
}

impl RenderSink for RecordingSink {
    fn render(&self, view: &BoardView) {
        self.views.lock().unwrap().push(view.clone());
    }
}

/// Helper function to create a board wired to a recording sink
pub fn create_test_board(config: BoardConfig, seed: u64) -> (Arc<RecordingSink>, Board) {
    let sink = Arc::new(RecordingSink::default());
    let board = BoardBuilder::new()
        .with_config(config)
        .with_sink(sink.clone())
        .with_seed(Some(seed))
        .build()
        .expect("Failed to build board");
    (sink, board)
}

pub fn record(flight_number: &str, date: &str, time: &str) -> FlightRecord {
    FlightRecord {
        date: date.to_string(),
        time: time.to_string(),
        destination: "MANCHESTER".to_string(),
        flight_number: flight_number.to_string(),
        notes: "-".to_string(),
        aircraft: "73H".to_string(),
        gate: "D".to_string(),
    }
}

/// Asserts that a view is in ascending schedule order with unique ids.
pub fn assert_ordered(view: &BoardView) {
    let keys: Vec<ScheduleKey> = view
        .iter()
        .map(|flight| ScheduleKey::parse(&flight.date, &flight.time, 2025).unwrap())
        .collect();
    assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]), "unsorted view: {view:?}");

    let mut ids = view.ids();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), view.len(), "duplicate flight in view: {view:?}");
}

/// Asserts a rendered status history only ever takes legal forward steps.
pub fn assert_forward_only(statuses: &[FlightStatus]) {
    assert_eq!(statuses.first(), Some(&FlightStatus::Departing));
    for pair in statuses.windows(2) {
        assert!(
            pair[0].can_advance_to(pair[1]),
            "illegal step {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }
}
