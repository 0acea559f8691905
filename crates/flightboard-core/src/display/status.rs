//! End-of-run summary line.

use std::fmt;

/// What a simulation run did, as printed when it stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Generated flights the board accepted
    pub added: u64,
    /// Generated records the board rejected
    pub rejected: u64,
    /// Flights still live when the run stopped
    pub remaining: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Simulation stopped: {} flights added, {} still on the board",
            self.added, self.remaining
        )?;
        if self.rejected > 0 {
            write!(f, " ({} generated records rejected)", self.rejected)?;
        }
        writeln!(f)
    }
}
