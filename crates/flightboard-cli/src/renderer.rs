//! Terminal rendering module for rich markdown output
//!
//! Boards are drawn with termimad as a markdown table, with optional
//! fallback to plain text or one JSON document per line.

use flightboard_core::{BoardView, LocalDateTime, RenderSink};
use jiff::Timestamp;
use log::warn;
use termimad::{crossterm::style::Color, MadSkin};

/// How boards and messages are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// termimad markdown with colors
    Rich,
    /// Raw markdown text
    Plain,
    /// One JSON array per board
    Json,
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    mode: OutputMode,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(mode: OutputMode) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { mode, skin }
    }

    /// Render markdown text to terminal
    pub fn print_markdown(&self, markdown: &str) {
        match self.mode {
            OutputMode::Rich => self.skin.print_text(markdown),
            OutputMode::Plain | OutputMode::Json => print!("{markdown}"),
        }
    }

    /// Board heading with the local wall-clock time of the redraw.
    fn heading() -> String {
        format!("## Departures at {}\n\n", LocalDateTime(&Timestamp::now()))
    }
}

impl RenderSink for TerminalRenderer {
    fn render(&self, view: &BoardView) {
        match self.mode {
            OutputMode::Json => match serde_json::to_string(view) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("Failed to serialize board: {e}"),
            },
            OutputMode::Rich | OutputMode::Plain => {
                self.print_markdown(&format!("{}{view}\n", Self::heading()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(OutputMode::Plain);
        assert_eq!(renderer.mode, OutputMode::Plain);
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(OutputMode::Rich);
        assert_eq!(renderer.mode, OutputMode::Rich);
    }

    #[test]
    fn test_heading_names_board() {
        assert!(TerminalRenderer::heading().starts_with("## Departures at "));
    }
}
