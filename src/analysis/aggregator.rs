//! Reduces a day's 24 hourly records into [`SummaryStats`].

use crate::analysis::error::SeriesError;
use crate::types::forecast_series::{ForecastSeries, HOURS_PER_DAY};
use crate::types::hourly_record::HourlyRecord;
use crate::types::summary_stats::SummaryStats;

/// Computes min/max temperature and the hourly means of wind speed,
/// precipitation and every probability.
///
/// The temperature extremes are seeded from hour 0, and every mean is a sum
/// over the 24 slots divided by 24. The result depends only on `series`.
///
/// # Examples
///
/// ```
/// use weather_outlook::{aggregate, ForecastSeries, HourlyRecord};
///
/// let mut records = [HourlyRecord::default(); 24];
/// records[3].measurements.temperature = -4.0;
/// records[15].measurements.temperature = 18.0;
///
/// let stats = aggregate(&ForecastSeries::from(records));
/// assert_eq!(stats.min_temp, -4.0);
/// assert_eq!(stats.max_temp, 18.0);
/// ```
pub fn aggregate(series: &ForecastSeries) -> SummaryStats {
    let records = series.records();
    let first = &records[0].measurements;

    let mut min_temp = first.temperature;
    let mut max_temp = first.temperature;
    let mut totals = Totals::default();

    for record in records {
        let temperature = record.measurements.temperature;
        if temperature < min_temp {
            min_temp = temperature;
        }
        if temperature > max_temp {
            max_temp = temperature;
        }
        totals.add(record);
    }

    let hours = HOURS_PER_DAY as f64;
    SummaryStats {
        min_temp,
        max_temp,
        avg_wind_speed: totals.wind_speed / hours,
        avg_precipitation: totals.precipitation / hours,
        avg_hot_prob: totals.very_hot / hours,
        avg_cold_prob: totals.very_cold / hours,
        avg_wet_prob: totals.very_wet / hours,
        avg_windy_prob: totals.very_windy / hours,
        avg_uncomfortable_prob: totals.very_uncomfortable / hours,
    }
}

/// Like [`aggregate`], for records that have not been checked yet.
///
/// # Errors
///
/// Returns [`SeriesError::MalformedSeries`] unless `records` holds exactly 24
/// entries. No partial statistics are computed in that case.
pub fn aggregate_records(records: &[HourlyRecord]) -> Result<SummaryStats, SeriesError> {
    let series = ForecastSeries::try_from(records)?;
    Ok(aggregate(&series))
}

#[derive(Default)]
struct Totals {
    wind_speed: f64,
    precipitation: f64,
    very_hot: f64,
    very_cold: f64,
    very_wet: f64,
    very_windy: f64,
    very_uncomfortable: f64,
}

impl Totals {
    fn add(&mut self, record: &HourlyRecord) {
        let m = &record.measurements;
        let p = &record.probabilities;
        self.wind_speed += m.wind_speed;
        self.precipitation += m.precipitation;
        self.very_hot += p.very_hot;
        self.very_cold += p.very_cold;
        self.very_wet += p.very_wet;
        self.very_windy += p.very_windy;
        self.very_uncomfortable += p.very_uncomfortable;
    }
}
