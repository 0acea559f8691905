//! Display implementations for domain models.
//!
//! Flights render as rows of the markdown board table; statuses render as
//! their board label.

use std::fmt;

use crate::models::{FlightRecord, FlightStatus, FlightView};

/// Board placeholder for a blank free-text column.
fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FlightView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            self.date,
            self.time,
            self.destination,
            self.flight_number,
            or_dash(&self.notes),
            or_dash(&self.aircraft),
            or_dash(&self.gate),
            self.status.with_icon()
        )
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} {} to {} (aircraft {}, gate {}): {}",
            self.flight_number,
            self.date,
            self.time,
            self.destination,
            or_dash(&self.aircraft),
            or_dash(&self.gate),
            or_dash(&self.notes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightId;

    #[test]
    fn test_status_display_is_label() {
        assert_eq!(FlightStatus::OnTime.to_string(), "ON_TIME");
    }

    #[test]
    fn test_row_uses_dash_for_blank_columns() {
        let view = FlightView {
            id: FlightId(3),
            date: "13-04".to_string(),
            time: "14:55".to_string(),
            destination: "KRAKOW".to_string(),
            flight_number: "FR5905".to_string(),
            notes: String::new(),
            aircraft: "7M8".to_string(),
            gate: " ".to_string(),
            status: FlightStatus::Delayed,
        };
        assert_eq!(
            view.to_string(),
            "| 13-04 | 14:55 | KRAKOW | FR5905 | - | 7M8 | - | ! DELAYED |\n"
        );
    }

    #[test]
    fn test_record_display() {
        let record = FlightRecord {
            date: "13-04".to_string(),
            time: "15:10".to_string(),
            destination: "MALAGA".to_string(),
            flight_number: "FR5921".to_string(),
            notes: "-".to_string(),
            aircraft: "73H".to_string(),
            gate: "A".to_string(),
        };
        let output = record.to_string();
        assert!(output.contains("**FR5921**"));
        assert!(output.contains("to MALAGA"));
    }
}
