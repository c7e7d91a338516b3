//! Defines [`ForecastSeries`], the fixed 24 slot hourly outlook for one day.

use crate::analysis::error::SeriesError;
use crate::types::hourly_record::{HourlyRecord, Measurements, Probabilities};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of hour-of-day slots in a series.
pub const HOURS_PER_DAY: usize = 24;

/// An outlook for one day, one [`HourlyRecord`] per hour, index = hour of day.
///
/// A `ForecastSeries` always holds exactly [`HOURS_PER_DAY`] records. Anything
/// shorter, longer or with gaps is rejected when the series is built, so code
/// that receives a series never has to check whether an hour exists.
///
/// # Examples
///
/// ```
/// use weather_outlook::{ForecastSeries, HourlyRecord};
///
/// let series = ForecastSeries::from([HourlyRecord::default(); 24]);
/// assert!(series.at_hour(23).is_some());
/// assert!(series.at_hour(24).is_none());
///
/// let too_short = ForecastSeries::try_from(vec![HourlyRecord::default(); 23]);
/// assert!(too_short.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HourlyRecord>", into = "Vec<HourlyRecord>")]
pub struct ForecastSeries {
    records: [HourlyRecord; HOURS_PER_DAY],
}

impl ForecastSeries {
    /// Decodes a dataset as produced by the data endpoint.
    ///
    /// Two layouts are accepted:
    /// * an array of 24 slots, index = hour;
    /// * an object keyed by hour (`"0"` to `"23"`).
    ///
    /// Every slot must be a `[measurements, probabilities]` pair.
    ///
    /// # Errors
    ///
    /// * [`SeriesError::Decode`] if `json` is not valid JSON.
    /// * [`SeriesError::MalformedSeries`] if the slot count is wrong, an hour is
    ///   missing or a slot lacks one of its two parts.
    pub fn from_json(json: &str) -> Result<Self, SeriesError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Same as [`ForecastSeries::from_json`], for an already parsed document.
    pub fn from_value(value: Value) -> Result<Self, SeriesError> {
        match value {
            Value::Array(slots) => {
                if slots.len() != HOURS_PER_DAY {
                    return Err(SeriesError::malformed(format!(
                        "expected {HOURS_PER_DAY} hourly slots, found {}",
                        slots.len()
                    )));
                }
                let records = slots
                    .into_iter()
                    .enumerate()
                    .map(|(hour, slot)| record_from_slot(hour, slot))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::try_from(records)
            }
            Value::Object(slots) => {
                let mut by_hour: Vec<Option<HourlyRecord>> = vec![None; HOURS_PER_DAY];
                for (key, slot) in slots {
                    let hour = key
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|hour| *hour < HOURS_PER_DAY)
                        .ok_or_else(|| {
                            SeriesError::malformed(format!("'{key}' is not an hour of day"))
                        })?;
                    if by_hour[hour].is_some() {
                        return Err(SeriesError::malformed(format!("hour {hour} appears twice")));
                    }
                    by_hour[hour] = Some(record_from_slot(hour, slot)?);
                }
                let records = by_hour
                    .into_iter()
                    .enumerate()
                    .map(|(hour, record)| {
                        record.ok_or_else(|| SeriesError::malformed(format!("hour {hour} is missing")))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::try_from(records)
            }
            other => Err(SeriesError::malformed(format!(
                "expected an array or an object of hourly slots, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// All 24 records in hour order.
    pub fn records(&self) -> &[HourlyRecord; HOURS_PER_DAY] {
        &self.records
    }

    /// The record for `hour`, or `None` when `hour` is not in `0..24`.
    pub fn at_hour(&self, hour: usize) -> Option<&HourlyRecord> {
        self.records.get(hour)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HourlyRecord> {
        self.records.iter()
    }
}

fn record_from_slot(hour: usize, slot: Value) -> Result<HourlyRecord, SeriesError> {
    let Value::Array(parts) = slot else {
        return Err(SeriesError::malformed(format!(
            "hour {hour} is not a [measurements, probabilities] pair"
        )));
    };
    let [measurements, probabilities]: [Value; 2] = parts.try_into().map_err(|parts: Vec<Value>| {
        SeriesError::malformed(format!("hour {hour} has {} parts, expected 2", parts.len()))
    })?;
    let measurements: Measurements = serde_json::from_value(measurements)
        .map_err(|e| SeriesError::malformed(format!("hour {hour} measurements: {e}")))?;
    let probabilities: Probabilities = serde_json::from_value(probabilities)
        .map_err(|e| SeriesError::malformed(format!("hour {hour} probabilities: {e}")))?;
    Ok(HourlyRecord::new(measurements, probabilities))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<[HourlyRecord; HOURS_PER_DAY]> for ForecastSeries {
    fn from(records: [HourlyRecord; HOURS_PER_DAY]) -> Self {
        Self { records }
    }
}

impl TryFrom<Vec<HourlyRecord>> for ForecastSeries {
    type Error = SeriesError;

    fn try_from(records: Vec<HourlyRecord>) -> Result<Self, Self::Error> {
        let records: [HourlyRecord; HOURS_PER_DAY] =
            records.try_into().map_err(|records: Vec<HourlyRecord>| {
                SeriesError::malformed(format!(
                    "expected {HOURS_PER_DAY} hourly records, found {}",
                    records.len()
                ))
            })?;
        Ok(Self { records })
    }
}

impl TryFrom<&[HourlyRecord]> for ForecastSeries {
    type Error = SeriesError;

    fn try_from(records: &[HourlyRecord]) -> Result<Self, Self::Error> {
        Self::try_from(records.to_vec())
    }
}

impl From<ForecastSeries> for Vec<HourlyRecord> {
    fn from(series: ForecastSeries) -> Self {
        series.records.to_vec()
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a HourlyRecord;
    type IntoIter = std::slice::Iter<'a, HourlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
