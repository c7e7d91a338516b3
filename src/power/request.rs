use crate::power::error::PowerError;
use crate::types::location::LatLon;
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A day and place to build an outlook for, as submitted by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Seconds since the Unix epoch; only the UTC calendar day is used.
    pub unix_time: i64,
    pub location: LatLon,
}

impl ForecastRequest {
    pub fn new(unix_time: i64, location: LatLon) -> Self {
        Self {
            unix_time,
            location,
        }
    }

    /// The UTC calendar day of `unix_time`.
    pub fn day(&self) -> Result<NaiveDate, PowerError> {
        DateTime::from_timestamp(self.unix_time, 0)
            .map(|datetime| datetime.date_naive())
            .ok_or(PowerError::InvalidTimestamp(self.unix_time))
    }
}

/// The day as `MMDD`, the part shared by every historical year.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%m%d").to_string()
}

/// The same calendar day in every year of `years` that has it.
///
/// February 29th only exists in leap years, so other years are skipped.
pub fn historical_dates(day: NaiveDate, years: RangeInclusive<i32>) -> Vec<NaiveDate> {
    years
        .filter_map(|year| NaiveDate::from_ymd_opt(year, day.month(), day.day()))
        .collect()
}
