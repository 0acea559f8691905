//! Collection wrapper for the ordered board.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{FlightId, FlightView};

/// Header row of the markdown board table.
pub(crate) const TABLE_HEADER: &str =
    "| Date | Time | Destination | Flight | Notes | Aircraft | Gate | Status |\n\
     |------|------|-------------|--------|-------|----------|------|--------|";

/// Ordered sequence of flight view records, as handed to render sinks.
///
/// The order is the board's display order: ascending by scheduled date and
/// time, ties kept in the order the flights were added.
///
/// # Examples
///
/// ```rust
/// use flightboard_core::{
///     display::BoardView,
///     models::{FlightId, FlightStatus, FlightView},
/// };
///
/// let view = BoardView(vec![FlightView {
///     id: FlightId(1),
///     date: "13-04".to_string(),
///     time: "14:25".to_string(),
///     destination: "MANCHESTER".to_string(),
///     flight_number: "LS936".to_string(),
///     notes: String::new(),
///     aircraft: "73H".to_string(),
///     gate: "D".to_string(),
///     status: FlightStatus::OnTime,
/// }]);
/// let output = format!("{}", view);
/// assert!(output.contains("| 13-04 | 14:25 | MANCHESTER | LS936 | - | 73H | D |"));
///
/// assert_eq!(format!("{}", BoardView::default()), "No flights on the board.\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardView(pub Vec<FlightView>);

impl BoardView {
    /// Check if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of flights on the board.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the flight at the given display position.
    pub fn get(&self, index: usize) -> Option<&FlightView> {
        self.0.get(index)
    }

    /// Get an iterator over the flights in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlightView> {
        self.0.iter()
    }

    /// Flight identities in display order.
    pub fn ids(&self) -> Vec<FlightId> {
        self.0.iter().map(|flight| flight.id).collect()
    }
}

impl Index<usize> for BoardView {
    type Output = FlightView;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for BoardView {
    type Item = FlightView;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BoardView {
    type Item = &'a FlightView;
    type IntoIter = std::slice::Iter<'a, FlightView>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No flights on the board.")
        } else {
            writeln!(f, "{TABLE_HEADER}")?;
            for flight in &self.0 {
                write!(f, "{}", flight)?;
            }
            Ok(())
        }
    }
}
