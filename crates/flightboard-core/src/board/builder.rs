//! Builder for creating and configuring Board instances.

use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};

use super::{Board, NullSink, RenderSink};
use crate::{config::BoardConfig, error::Result};

/// Builder for creating and configuring Board instances.
#[derive(Clone)]
pub struct BoardBuilder {
    config: BoardConfig,
    sink: Option<Arc<dyn RenderSink>>,
    seed: Option<u64>,
}

impl BoardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: BoardConfig::default(),
            sink: None,
            seed: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the sink every render is handed to. Defaults to [`NullSink`].
    pub fn with_sink(mut self, sink: Arc<dyn RenderSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Seeds the coin flip, overriding any seed in the configuration.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        self
    }

    /// Builds the configured board.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` if the configuration fails
    /// validation.
    pub fn build(self) -> Result<Board> {
        self.config.validate()?;

        let rng = match self.seed.or(self.config.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sink = self.sink.unwrap_or_else(|| Arc::new(NullSink));

        log::debug!(
            "Building board with {:?} discipline",
            self.config.discipline
        );
        Ok(Board::new(self.config, sink, rng))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
