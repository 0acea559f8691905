//! Flight record generation for the simulation.

use log::warn;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{BoardConfig, Source},
    models::FlightRecord,
};

/// Produces a new flight record on each call to [`FlightGenerator::next_record`].
pub struct FlightGenerator {
    source: Source,
    templates: Vec<FlightRecord>,
    date: String,
    rng: StdRng,
}

impl FlightGenerator {
    /// Creates a generator from the configured source, template pool and
    /// date. `seed` makes the sequence reproducible.
    ///
    /// An absent or empty pool falls back to [`default_templates`].
    pub fn new(config: &BoardConfig, seed: Option<u64>) -> Self {
        let templates = match &config.templates {
            Some(pool) if !pool.is_empty() => pool.clone(),
            Some(_) => {
                warn!("Configured template pool is empty, using the built-in pool");
                default_templates()
            }
            None => default_templates(),
        };
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            source: config.source,
            templates,
            date: config.date.clone(),
            rng,
        }
    }

    /// The template pool this generator draws from.
    pub fn templates(&self) -> &[FlightRecord] {
        &self.templates
    }

    /// Draws the next record.
    pub fn next_record(&mut self) -> FlightRecord {
        match self.source {
            Source::Templates => self.pick_template(),
            Source::Random => self.synthesize(),
        }
    }

    fn pick_template(&mut self) -> FlightRecord {
        // never empty, see `new`
        let index = self.rng.gen_range(0..self.templates.len());
        self.templates[index].clone()
    }

    fn synthesize(&mut self) -> FlightRecord {
        let rng = &mut self.rng;
        FlightRecord {
            date: self.date.clone(),
            time: format!("{:02}:{:02}", rng.gen_range(10..22), rng.gen_range(0..60)),
            destination: CITIES[rng.gen_range(0..CITIES.len())].to_string(),
            flight_number: format!("FL{}", rng.gen_range(0..1000)),
            notes: NOTES[rng.gen_range(0..NOTES.len())].to_string(),
            aircraft: AIRCRAFT[rng.gen_range(0..AIRCRAFT.len())].to_string(),
            gate: format!(
                "{}{}",
                TERMINALS[rng.gen_range(0..TERMINALS.len())],
                rng.gen_range(1..=20)
            ),
        }
    }
}

static CITIES: &[&str] = &["Tokyo", "London", "Paris", "Dubai", "New York", "Sydney"];

static AIRCRAFT: &[&str] = &["73H", "7M8", "E95", "320", "321", "77W"];

static TERMINALS: &[&str] = &["A", "B", "C"];

static NOTES: &[&str] = &[
    "-",
    "BOARDING",
    "GATE OPEN",
    "PROCEED TO THE GATE 30 MINUTES BEFORE BOARDING",
];

/// The built-in departures of 13-04.
pub fn default_templates() -> Vec<FlightRecord> {
    [
        ("13:10", "TEL-AVIV", "FR5902", "BOARDING", "73H", "A"),
        ("14:20", "FRANKFURT", "EN8845", "EXPECTED DEPARTURE AT 14:45", "E95", "C"),
        ("14:25", "MANCHESTER", "LS936", "-", "73H", "D"),
        ("14:55", "KRAKOW", "FR5905", "-", "7M8", "A"),
        ("15:05", "REGGIO CALABRIA", "FR8595", "-", "73H", "A"),
        ("15:10", "MALAGA", "FR5921", "-", "73H", "A"),
    ]
    .into_iter()
    .map(|(time, destination, flight_number, notes, aircraft, gate)| FlightRecord {
        date: "13-04".to_string(),
        time: time.to_string(),
        destination: destination.to_string(),
        flight_number: flight_number.to_string(),
        notes: notes.to_string(),
        aircraft: aircraft.to_string(),
        gate: gate.to_string(),
    })
    .collect()
}
