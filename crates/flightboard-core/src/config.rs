//! Board configuration: timing discipline, delays and generator settings.
//!
//! Configuration is plain JSON. Every field is optional; anything left out
//! takes the value from [`BoardConfig::default`].
//!
//! ```json
//! {
//!   "discipline": "independent",
//!   "timings": { "on_time_after_ms": 10000, "retention_ms": 60000 },
//!   "delay_probability": 0.3,
//!   "source": "templates",
//!   "seed": 7
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{BoardError, Result},
    models::{FlightRecord, ScheduleKey, DEFAULT_ANCHOR_YEAR},
};

/// How flights advance through their statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// Every flight runs its own timeline from its creation moment, with a
    /// one-time coin flip between `DELAYED` and `ARRIVED`.
    #[default]
    Independent,

    /// All flights advance exactly one step on each shared tick; no
    /// branching.
    Lockstep,
}

/// Where the generator draws new flights from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Uniform pick from the template pool
    #[default]
    Templates,

    /// Synthesised flight numbers, cities and times
    Random,
}

/// Delays and periods, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timings {
    /// `DEPARTING -> ON_TIME`, measured from creation
    pub on_time_after_ms: u64,
    /// `ON_TIME -> DELAYED | ARRIVED`
    pub outcome_after_ms: u64,
    /// `DELAYED -> ARRIVED`
    pub delayed_for_ms: u64,
    /// Visibility after `ARRIVED`, before removal
    pub retention_ms: u64,
    /// Shared tick period for the lock-step discipline
    pub tick_ms: u64,
    /// Interval between generated flights
    pub generator_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            on_time_after_ms: 10_000,
            outcome_after_ms: 10_000,
            delayed_for_ms: 10_000,
            retention_ms: 60_000,
            tick_ms: 10_000,
            generator_ms: 10_000,
        }
    }
}

impl Timings {
    pub fn on_time_after(&self) -> Duration {
        Duration::from_millis(self.on_time_after_ms)
    }

    pub fn outcome_after(&self) -> Duration {
        Duration::from_millis(self.outcome_after_ms)
    }

    pub fn delayed_for(&self) -> Duration {
        Duration::from_millis(self.delayed_for_ms)
    }

    pub fn retention(&self) -> Duration {
        Duration::from_millis(self.retention_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn generator(&self) -> Duration {
        Duration::from_millis(self.generator_ms)
    }

    fn validate(&self) -> Result<()> {
        let periods = [
            ("timings.on_time_after_ms", self.on_time_after_ms),
            ("timings.outcome_after_ms", self.outcome_after_ms),
            ("timings.delayed_for_ms", self.delayed_for_ms),
            ("timings.retention_ms", self.retention_ms),
            ("timings.tick_ms", self.tick_ms),
            ("timings.generator_ms", self.generator_ms),
        ];
        for (field, value) in periods {
            if value == 0 {
                return Err(BoardError::invalid_input(field).with_reason("must be greater than 0"));
            }
        }
        Ok(())
    }
}

/// Complete board and simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub discipline: Discipline,
    pub timings: Timings,
    /// Chance of the `DELAYED` branch under the independent discipline
    pub delay_probability: f64,
    /// Calendar year the `DD-MM` dates are anchored to
    pub anchor_year: i16,
    pub source: Source,
    /// Date given to randomly synthesised flights, `DD-MM`
    pub date: String,
    /// Seed for reproducible runs; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Replacement template pool; the built-in pool when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<FlightRecord>>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            discipline: Discipline::default(),
            timings: Timings::default(),
            delay_probability: 0.3,
            anchor_year: DEFAULT_ANCHOR_YEAR,
            source: Source::default(),
            date: "13-04".to_string(),
            seed: None,
            templates: None,
        }
    }
}

impl BoardConfig {
    /// Loads configuration from `path`, or from the XDG config file when no
    /// path is given. A missing XDG file yields the defaults; a missing
    /// explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::FileSystem` if the file cannot be read,
    /// `BoardError::Serialization` if it is not valid JSON, and the
    /// validation errors of [`BoardConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        log::debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(&path).map_err(|e| BoardError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Serialization` for malformed JSON and the
    /// validation errors of [`BoardConfig::validate`].
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges and that any configured templates are usable.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        self.timings.validate()?;

        if !(0.0..=1.0).contains(&self.delay_probability) {
            return Err(BoardError::invalid_input("delay_probability")
                .with_reason(format!("{} is not within [0, 1]", self.delay_probability)));
        }

        // Anchoring a fixed slot checks the year is representable.
        ScheduleKey::parse(&self.date, "00:00", self.anchor_year)?;

        if let Some(templates) = &self.templates {
            if templates.is_empty() {
                return Err(BoardError::invalid_input("templates")
                    .with_reason("must contain at least one flight"));
            }
            for template in templates {
                template.validate()?;
                ScheduleKey::parse(&template.date, &template.time, self.anchor_year)?;
            }
        }

        Ok(())
    }

    /// Returns the XDG config file path if such a file exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("flightboard").find_config_file("config.json")
    }
}
