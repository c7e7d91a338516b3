//! The typed shape of one hour's outlook.

use serde::{Deserialize, Serialize};

/// Physical quantities for one hour-of-day slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Precipitation in mm/hr.
    pub precipitation: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
}

/// Likelihood (0 to 1) of adverse weather for one hour-of-day slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Probabilities {
    pub very_hot: f64,
    pub very_cold: f64,
    pub very_wet: f64,
    pub very_windy: f64,
    pub very_uncomfortable: f64,
}

/// One hour of the outlook: what is expected and how likely the bad cases are.
///
/// On the wire a record is a two element array `[measurements, probabilities]`.
/// In Rust both halves are named so nothing depends on positional indexing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(Measurements, Probabilities)", into = "(Measurements, Probabilities)")]
pub struct HourlyRecord {
    pub measurements: Measurements,
    pub probabilities: Probabilities,
}

impl HourlyRecord {
    pub fn new(measurements: Measurements, probabilities: Probabilities) -> Self {
        Self {
            measurements,
            probabilities,
        }
    }
}

impl From<(Measurements, Probabilities)> for HourlyRecord {
    fn from((measurements, probabilities): (Measurements, Probabilities)) -> Self {
        Self::new(measurements, probabilities)
    }
}

impl From<HourlyRecord> for (Measurements, Probabilities) {
    fn from(record: HourlyRecord) -> Self {
        (record.measurements, record.probabilities)
    }
}
