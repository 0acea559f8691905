//! Composite sort key built from a flight's scheduled date and time.
//!
//! Only the day and month are published on the board, so the key anchors
//! them to a fixed calendar year before combining with the time of day.
//!
//! Accepted input is deliberately narrow:
//!
//! - date: `DD-MM`, exactly two digits each, e.g. `13-04`
//! - time: `HH:MM`, exactly two digits each, 24-hour clock, e.g. `14:25`
//!
//! Since no padding variants are accepted, two distinct valid `(date, time)`
//! string pairs never produce equal keys.

use std::fmt;

use jiff::civil::{Date, DateTime, Time};

use crate::error::{BoardError, Result};

/// Anchor year used when none is configured.
pub const DEFAULT_ANCHOR_YEAR: i16 = 2025;

/// Totally ordered instant derived from a `DD-MM` date and `HH:MM` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleKey(DateTime);

impl ScheduleKey {
    /// Parses the board date and time into a key anchored at `anchor_year`.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` naming the offending field when
    /// either string is not in the accepted shape or does not name a real
    /// calendar date/time in the anchor year.
    pub fn parse(date: &str, time: &str, anchor_year: i16) -> Result<Self> {
        let (day, month) = split_pair(date, '-').ok_or_else(|| {
            BoardError::invalid_input("date").with_reason(format!("expected DD-MM, got '{date}'"))
        })?;
        let (hour, minute) = split_pair(time, ':').ok_or_else(|| {
            BoardError::invalid_input("time").with_reason(format!("expected HH:MM, got '{time}'"))
        })?;

        let date = Date::new(anchor_year, month as i8, day as i8).map_err(|e| {
            BoardError::invalid_input("date")
                .with_reason(format!("'{date}' is not a date in {anchor_year}: {e}"))
        })?;
        let time = Time::new(hour as i8, minute as i8, 0, 0).map_err(|e| {
            BoardError::invalid_input("time").with_reason(format!("'{time}' is not a time: {e}"))
        })?;

        Ok(Self(date.to_datetime(time)))
    }

    /// The underlying civil date-time.
    pub fn datetime(&self) -> DateTime {
        self.0
    }
}

impl fmt::Display for ScheduleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M"))
    }
}

/// Splits `"NN<sep>NN"` into its two numbers, rejecting anything else.
fn split_pair(input: &str, sep: char) -> Option<(u8, u8)> {
    let bytes = input.as_bytes();
    if bytes.len() != 5 || bytes[2] != sep as u8 {
        return None;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let [a, b, c, d] = digits.map(|d| d - b'0');
    Some((a * 10 + b, c * 10 + d))
}
