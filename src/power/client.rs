//! HTTP client for the NASA POWER hourly point API.

use crate::power::error::PowerError;
use crate::power::request::historical_dates;
use crate::power::response::PowerResponse;
use crate::types::location::LatLon;
use chrono::NaiveDate;
use futures_util::future::try_join_all;
use log::{info, warn};
use reqwest::Client;
use std::ops::RangeInclusive;

pub const POWER_HOURLY_API: &str = "https://power.larc.nasa.gov/api/temporal/hourly/point";
/// Temperature, precipitation and wind speed.
pub const POWER_PARAMETERS: &str = "T2M,PRECTOTCORR,WS2M";
pub const START_YEAR: i32 = 2001;
pub const END_YEAR: i32 = 2024;

#[derive(Debug, Clone)]
pub struct PowerClient {
    client: Client,
    base_url: String,
}

impl Default for PowerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerClient {
    pub fn new() -> Self {
        Self::with_base_url(POWER_HOURLY_API)
    }

    /// Points the client at another endpoint serving the same API.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the hourly observations of `day`'s calendar date in every year
    /// of `years`, all years in flight at once.
    ///
    /// Fails as a whole if any single year fails.
    pub async fn fetch_day(
        &self,
        location: LatLon,
        day: NaiveDate,
        years: RangeInclusive<i32>,
    ) -> Result<Vec<PowerResponse>, PowerError> {
        if years.is_empty() {
            return Err(PowerError::EmptyYearRange {
                start: *years.start(),
                end: *years.end(),
            });
        }
        let dates = historical_dates(day, years);
        info!(
            "Fetching {} years of hourly observations for {} at ({}, {})",
            dates.len(),
            day.format("%m-%d"),
            location.latitude(),
            location.longitude()
        );
        try_join_all(dates.into_iter().map(|date| self.fetch_date(location, date))).await
    }

    async fn fetch_date(
        &self,
        location: LatLon,
        date: NaiveDate,
    ) -> Result<PowerResponse, PowerError> {
        let stamp = date.format("%Y%m%d").to_string();
        let url = format!("{}?start={stamp}&end={stamp}", self.base_url);
        let query = [
            ("start", stamp.clone()),
            ("end", stamp),
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("community", "re".to_string()),
            ("parameters", POWER_PARAMETERS.to_string()),
            ("format", "JSON".to_string()),
            ("units", "metric".to_string()),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| PowerError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    PowerError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    PowerError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| PowerError::NetworkRequest(url, e))?;
        serde_json::from_slice(&body).map_err(|source| PowerError::InvalidResponse { date, source })
    }
}
