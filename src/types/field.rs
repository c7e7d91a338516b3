//! Defines [`FieldName`], the measurement a chart can plot.

use crate::analysis::error::SeriesError;
use crate::types::hourly_record::Measurements;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chartable measurement of an hourly record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// Air temperature (°C). The default chart.
    #[default]
    Temperature,
    /// Precipitation (mm/hr).
    Precipitation,
    /// Wind speed (m/s).
    WindSpeed,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [
        FieldName::Temperature,
        FieldName::Precipitation,
        FieldName::WindSpeed,
    ];

    /// The identifier the UI uses for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Temperature => "temperature",
            FieldName::Precipitation => "precipitation",
            FieldName::WindSpeed => "wind_speed",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            FieldName::Temperature => "°C",
            FieldName::Precipitation => "mm/hr",
            FieldName::WindSpeed => "m/s",
        }
    }

    /// Label text shown with a chart of this field.
    pub fn chart_label(&self) -> &'static str {
        match self {
            FieldName::Temperature => "Average temperature in C every hour",
            FieldName::Precipitation => "Average precipitation in mm/hr every hour",
            FieldName::WindSpeed => "Average wind speed in m/s every hour",
        }
    }

    pub(crate) fn read(&self, measurements: &Measurements) -> f64 {
        match self {
            FieldName::Temperature => measurements.temperature,
            FieldName::Precipitation => measurements.precipitation,
            FieldName::WindSpeed => measurements.wind_speed,
        }
    }
}

impl FromStr for FieldName {
    type Err = SeriesError;

    /// Parses a UI field identifier.
    ///
    /// ```
    /// use weather_outlook::{FieldName, SeriesError};
    ///
    /// assert_eq!("wind_speed".parse::<FieldName>().ok(), Some(FieldName::WindSpeed));
    /// assert!(matches!("humidity".parse::<FieldName>(), Err(SeriesError::UnknownField(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SeriesError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for field in FieldName::ALL {
            assert_eq!(field.to_string().parse::<FieldName>().ok(), Some(field));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Temperature".parse::<FieldName>().is_err());
        assert!("wind speed".parse::<FieldName>().is_err());
        assert!("".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_chart_labels() {
        assert_eq!(
            FieldName::WindSpeed.chart_label(),
            "Average wind speed in m/s every hour"
        );
        assert_eq!(
            FieldName::Precipitation.chart_label(),
            "Average precipitation in mm/hr every hour"
        );
        assert_eq!(
            FieldName::Temperature.chart_label(),
            "Average temperature in C every hour"
        );
    }
}
