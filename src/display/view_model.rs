//! Display-ready strings for the summary panels.

use crate::types::comfort_label::ComfortLabel;
use crate::types::hourly_record::HourlyRecord;
use crate::types::summary_stats::SummaryStats;
use serde::Serialize;

/// Hour shown as the primary reading of the day.
pub const HIGHLIGHT_HOUR: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperaturePanel {
    pub min: String,
    pub max: String,
    pub hot_probability: String,
    pub cold_probability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationPanel {
    pub average: String,
    pub wet_probability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindPanel {
    pub average: String,
    pub windy_probability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComfortPanel {
    pub label: ComfortLabel,
    pub text: String,
    pub uncomfortable_probability: String,
}

/// Readings at [`HIGHLIGHT_HOUR`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourSnapshot {
    pub hour: usize,
    pub temperature: String,
    pub precipitation: String,
    pub wind_speed: String,
}

/// Everything the summary view shows, already formatted.
///
/// Numbers carry two decimals and their unit, probabilities are percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayViewModel {
    pub temperature: TemperaturePanel,
    pub precipitation: PrecipitationPanel,
    pub wind: WindPanel,
    pub comfort: ComfortPanel,
    pub highlight: HourSnapshot,
}

impl DisplayViewModel {
    pub fn new(stats: &SummaryStats, label: ComfortLabel, highlight: &HourlyRecord) -> Self {
        let m = &highlight.measurements;
        Self {
            temperature: TemperaturePanel {
                min: celsius(stats.min_temp),
                max: celsius(stats.max_temp),
                hot_probability: percent(stats.avg_hot_prob),
                cold_probability: percent(stats.avg_cold_prob),
            },
            precipitation: PrecipitationPanel {
                average: format!("{:.2} mm/hr", stats.avg_precipitation),
                wet_probability: percent(stats.avg_wet_prob),
            },
            wind: WindPanel {
                average: format!("{:.2} m/s", stats.avg_wind_speed),
                windy_probability: percent(stats.avg_windy_prob),
            },
            comfort: ComfortPanel {
                label,
                text: label.to_string(),
                uncomfortable_probability: percent(stats.avg_uncomfortable_prob),
            },
            highlight: HourSnapshot {
                hour: HIGHLIGHT_HOUR,
                temperature: celsius(m.temperature),
                precipitation: format!("{:.2} mm/hr", m.precipitation),
                wind_speed: format!("{:.2} m/s", m.wind_speed),
            },
        }
    }
}

fn celsius(value: f64) -> String {
    format!("{value:.2}°C")
}

fn percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}
