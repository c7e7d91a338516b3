//! Serde model of a NASA POWER hourly point response.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value POWER reports for an hour it has no observation for.
pub const MISSING_VALUE: f64 = -999.0;

/// One year's worth of hourly observations for the requested day.
///
/// Only the parts the outlook needs are modelled; everything else in the
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerResponse {
    pub properties: PowerProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerProperties {
    pub parameter: PowerParameters,
}

/// Observations keyed by `YYYYMMDDHH` timestamps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerParameters {
    /// `T2M`: temperature at 2 m, °C.
    #[serde(rename = "T2M")]
    pub temperature: BTreeMap<String, f64>,
    /// `PRECTOTCORR`: bias corrected precipitation, mm/hr.
    #[serde(rename = "PRECTOTCORR")]
    pub precipitation: BTreeMap<String, f64>,
    /// `WS2M`: wind speed at 2 m, m/s.
    #[serde(rename = "WS2M")]
    pub wind_speed: BTreeMap<String, f64>,
}

impl PowerResponse {
    pub fn parameters(&self) -> &PowerParameters {
        &self.properties.parameter
    }
}
