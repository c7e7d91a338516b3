use crate::types::hourly_record::Probabilities;
use serde::{Deserialize, Serialize};

/// Day-level statistics over the 24 slots of a [`crate::ForecastSeries`].
///
/// Produced by [`crate::aggregate`]; every value is a min, max or arithmetic
/// mean over all hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_wind_speed: f64,
    pub avg_precipitation: f64,
    pub avg_hot_prob: f64,
    pub avg_cold_prob: f64,
    pub avg_wet_prob: f64,
    pub avg_windy_prob: f64,
    pub avg_uncomfortable_prob: f64,
}

impl SummaryStats {
    /// The averaged probabilities, in the shape [`crate::classify`] takes.
    pub fn average_probabilities(&self) -> Probabilities {
        Probabilities {
            very_hot: self.avg_hot_prob,
            very_cold: self.avg_cold_prob,
            very_wet: self.avg_wet_prob,
            very_windy: self.avg_windy_prob,
            very_uncomfortable: self.avg_uncomfortable_prob,
        }
    }
}
