//! Reduces many years of hourly observations for one calendar day into a
//! [`ForecastSeries`] of expected values and adverse-weather probabilities.

use crate::power::response::{PowerResponse, MISSING_VALUE};
use crate::prediction::error::PredictionError;
use crate::types::forecast_series::{ForecastSeries, HOURS_PER_DAY};
use crate::types::hourly_record::{HourlyRecord, Measurements, Probabilities};
use log::{debug, warn};
use polars::prelude::*;

/// Above this temperature (°C) an hour counts as very hot.
pub const HOT_THRESHOLD: f64 = 30.0;
/// Below this temperature (°C) an hour counts as very cold.
pub const COLD_THRESHOLD: f64 = -20.0;
/// Above this wind speed (m/s) an hour counts as very windy.
pub const WINDY_THRESHOLD: f64 = 10.0;
/// Above this precipitation (mm/hr) an hour counts as very wet.
pub const WET_THRESHOLD: f64 = 1.0;

const TIMESTAMP_LEN: usize = 10;

/// Builds the outlook of one day from the yearly POWER responses for it.
///
/// For every hour the measurements are the mean over all years and each
/// probability is the share of years past its threshold. Missing samples are
/// left out of both. `very_uncomfortable` is the largest of the four
/// probabilities. An hour without a single temperature sample becomes an
/// all-zero record.
///
/// # Errors
///
/// [`PredictionError::NoData`] when `responses` is empty, and
/// [`PredictionError::Frame`] if polars fails to reduce the samples.
pub fn build_series(responses: &[PowerResponse]) -> Result<ForecastSeries, PredictionError> {
    if responses.is_empty() {
        return Err(PredictionError::NoData);
    }

    let samples = collect_samples(responses);
    debug!(
        "Reducing {} hourly samples from {} years",
        samples.hour.len(),
        responses.len()
    );
    let reduced = reduce_by_hour(samples.into_frame()?)?;
    series_from_frame(&reduced)
}

#[derive(Default)]
struct Samples {
    hour: Vec<i32>,
    temperature: Vec<Option<f64>>,
    precipitation: Vec<Option<f64>>,
    wind_speed: Vec<Option<f64>>,
}

impl Samples {
    fn into_frame(self) -> PolarsResult<DataFrame> {
        df!(
            "hour" => self.hour,
            "temperature" => self.temperature,
            "precipitation" => self.precipitation,
            "wind_speed" => self.wind_speed
        )
    }
}

fn collect_samples(responses: &[PowerResponse]) -> Samples {
    let mut samples = Samples::default();
    for response in responses {
        let parameters = response.parameters();
        for (timestamp, temperature) in &parameters.temperature {
            let Some(hour) = hour_of(timestamp) else {
                if timestamp.chars().all(|c| c.is_ascii_digit()) {
                    warn!("Skipping sample with unexpected timestamp '{}'", timestamp);
                }
                continue;
            };
            samples.hour.push(hour);
            samples.temperature.push(observed(Some(temperature)));
            samples
                .precipitation
                .push(observed(parameters.precipitation.get(timestamp)));
            samples
                .wind_speed
                .push(observed(parameters.wind_speed.get(timestamp)));
        }
    }
    samples
}

/// Hour of day from a `YYYYMMDDHH` timestamp.
fn hour_of(timestamp: &str) -> Option<i32> {
    if timestamp.len() != TIMESTAMP_LEN || !timestamp.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    timestamp[8..]
        .parse::<i32>()
        .ok()
        .filter(|hour| (0..HOURS_PER_DAY as i32).contains(hour))
}

fn observed(value: Option<&f64>) -> Option<f64> {
    value.copied().filter(|v| *v != MISSING_VALUE)
}

fn share_above(column: &str, threshold: f64) -> Expr {
    col(column).gt(lit(threshold)).cast(DataType::Float64).mean()
}

fn share_below(column: &str, threshold: f64) -> Expr {
    col(column).lt(lit(threshold)).cast(DataType::Float64).mean()
}

fn reduce_by_hour(samples: DataFrame) -> PolarsResult<DataFrame> {
    samples
        .lazy()
        .group_by([col("hour")])
        .agg([
            col("temperature").mean().alias("temperature"),
            col("precipitation").mean().alias("precipitation"),
            col("wind_speed").mean().alias("wind_speed"),
            share_above("temperature", HOT_THRESHOLD).alias("very_hot"),
            share_below("temperature", COLD_THRESHOLD).alias("very_cold"),
            share_above("wind_speed", WINDY_THRESHOLD).alias("very_windy"),
            share_above("precipitation", WET_THRESHOLD).alias("very_wet"),
        ])
        .collect()
}

fn series_from_frame(reduced: &DataFrame) -> Result<ForecastSeries, PredictionError> {
    let hours = reduced.column("hour")?.i32()?;
    let temperature = reduced.column("temperature")?.f64()?;
    let precipitation = reduced.column("precipitation")?.f64()?;
    let wind_speed = reduced.column("wind_speed")?.f64()?;
    let very_hot = reduced.column("very_hot")?.f64()?;
    let very_cold = reduced.column("very_cold")?.f64()?;
    let very_windy = reduced.column("very_windy")?.f64()?;
    let very_wet = reduced.column("very_wet")?.f64()?;

    let mut records = [HourlyRecord::default(); HOURS_PER_DAY];
    for row in 0..reduced.height() {
        let Some(hour) = hours.get(row).and_then(|h| usize::try_from(h).ok()) else {
            continue;
        };
        let (Some(record), Some(mean_temperature)) = (records.get_mut(hour), temperature.get(row))
        else {
            continue;
        };

        let hot = very_hot.get(row).unwrap_or(0.0);
        let cold = very_cold.get(row).unwrap_or(0.0);
        let windy = very_windy.get(row).unwrap_or(0.0);
        let wet = very_wet.get(row).unwrap_or(0.0);

        *record = HourlyRecord::new(
            Measurements {
                temperature: round_to(mean_temperature, 1),
                precipitation: round_to(precipitation.get(row).unwrap_or(0.0), 2),
                wind_speed: round_to(wind_speed.get(row).unwrap_or(0.0), 1),
            },
            Probabilities {
                very_hot: round_to(hot, 2),
                very_cold: round_to(cold, 2),
                very_wet: round_to(wet, 2),
                very_windy: round_to(windy, 2),
                very_uncomfortable: round_to(hot.max(cold).max(windy).max(wet), 2),
            },
        );
    }
    Ok(ForecastSeries::from(records))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::response::{PowerParameters, PowerProperties};
    use std::collections::BTreeMap;

    /// A response for `year` with the same readings at every hour.
    fn response(year: i32, temperature: f64, precipitation: f64, wind_speed: f64) -> PowerResponse {
        let mut parameters = PowerParameters::default();
        for hour in 0..HOURS_PER_DAY {
            let stamp = format!("{year}0715{hour:02}");
            parameters.temperature.insert(stamp.clone(), temperature);
            parameters.precipitation.insert(stamp.clone(), precipitation);
            parameters.wind_speed.insert(stamp, wind_speed);
        }
        PowerResponse {
            properties: PowerProperties {
                parameter: parameters,
            },
        }
    }

    #[test]
    fn test_no_responses() {
        assert!(matches!(build_series(&[]), Err(PredictionError::NoData)));
    }

    #[test]
    fn test_means_and_shares() -> Result<(), PredictionError> {
        let responses = vec![
            response(2001, 32.0, 0.0, 4.0),
            response(2002, 28.0, 2.0, 12.0),
            response(2003, 31.0, 0.5, 3.0),
            response(2004, 25.0, 0.1, 5.0),
        ];
        let series = build_series(&responses)?;

        for record in series.iter() {
            assert_eq!(record.measurements.temperature, 29.0);
            assert_eq!(record.measurements.precipitation, 0.65);
            assert_eq!(record.measurements.wind_speed, 6.0);
            assert_eq!(record.probabilities.very_hot, 0.5);
            assert_eq!(record.probabilities.very_cold, 0.0);
            assert_eq!(record.probabilities.very_windy, 0.25);
            assert_eq!(record.probabilities.very_wet, 0.25);
            assert_eq!(record.probabilities.very_uncomfortable, 0.5);
        }
        Ok(())
    }

    #[test]
    fn test_missing_values_are_left_out() -> Result<(), PredictionError> {
        let responses = vec![
            response(2001, -25.0, 0.0, 2.0),
            response(2002, MISSING_VALUE, 0.0, 2.0),
            response(2003, -15.0, MISSING_VALUE, 2.0),
        ];
        let series = build_series(&responses)?;
        let noon = series.at_hour(12).copied().unwrap_or_default();

        assert_eq!(noon.measurements.temperature, -20.0);
        assert_eq!(noon.probabilities.very_cold, 0.5);
        assert_eq!(noon.probabilities.very_uncomfortable, 0.5);
        Ok(())
    }

    #[test]
    fn test_hour_without_temperature_is_zero() -> Result<(), PredictionError> {
        let mut only = response(2001, 20.0, 0.3, 4.0);
        only.properties
            .parameter
            .temperature
            .insert("2001071503".to_string(), MISSING_VALUE);
        let series = build_series(&[only])?;

        assert_eq!(series.at_hour(3).copied(), Some(HourlyRecord::default()));
        assert_eq!(
            series.at_hour(4).map(|r| r.measurements.temperature),
            Some(20.0)
        );
        Ok(())
    }

    #[test]
    fn test_hours_absent_from_every_year_are_zero() -> Result<(), PredictionError> {
        let mut temperature = BTreeMap::new();
        temperature.insert("2001071510".to_string(), 18.0);
        temperature.insert("units".to_string(), 0.0);
        let sparse = PowerResponse {
            properties: PowerProperties {
                parameter: PowerParameters {
                    temperature,
                    ..Default::default()
                },
            },
        };
        let series = build_series(&[sparse])?;

        let hour_ten = series.at_hour(10).copied().unwrap_or_default();
        assert_eq!(hour_ten.measurements.temperature, 18.0);
        assert_eq!(hour_ten.measurements.precipitation, 0.0);
        assert_eq!(series.at_hour(11).copied(), Some(HourlyRecord::default()));
        Ok(())
    }

    #[test]
    fn test_hour_of() {
        assert_eq!(hour_of("2010071523"), Some(23));
        assert_eq!(hour_of("2010071500"), Some(0));
        assert_eq!(hour_of("2010071524"), None);
        assert_eq!(hour_of("units"), None);
        assert_eq!(hour_of("20100715"), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(21.349, 1), 21.3);
        assert_eq!(round_to(0.666, 2), 0.67);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.625, 2), 0.62);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn test_exact_halves_round_to_even() -> Result<(), PredictionError> {
        let responses: Vec<_> = (2001..=2024)
            .map(|year| {
                let temperature = if year <= 2003 { 35.0 } else { 20.0 };
                response(year, temperature, 0.0, 0.0)
            })
            .collect();
        let series = build_series(&responses)?;

        for record in series.iter() {
            // 3 of 24 years is 0.125
            assert_eq!(record.probabilities.very_hot, 0.12);
            assert_eq!(record.probabilities.very_uncomfortable, 0.12);
            // 21.875
            assert_eq!(record.measurements.temperature, 21.9);
        }
        Ok(())
    }
}
