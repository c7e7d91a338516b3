//! This module provides the main entry point for building a day's weather
//! outlook: it turns a date and a location into a [`ForecastSeries`], fetching
//! historical observations only when no cached outlook exists.

use crate::error::OutlookError;
use crate::power::cache::ForecastCache;
use crate::power::client::{PowerClient, END_YEAR, START_YEAR};
use crate::power::request::ForecastRequest;
use crate::prediction::builder::build_series;
use crate::types::forecast_series::ForecastSeries;
use crate::types::location::LatLon;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use log::{info, warn};
use std::path::PathBuf;

/// Client producing [`ForecastSeries`] datasets for a day and place.
///
/// An outlook is a climatology: for the requested calendar day it averages
/// the hourly observations of every year in the configured range. Results are
/// cached on disk, keyed by day, location and year range.
///
/// # Examples
///
/// ```no_run
/// use weather_outlook::{LatLon, Outlook, OutlookError};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), OutlookError> {
/// let outlook = Outlook::new().await?;
/// let series = outlook
///     .forecast()
///     .location(LatLon(41.711033, 44.758182))
///     .unix_time(1_784_073_600)
///     .call()
///     .await?;
/// println!("Noon: {:?}", series.at_hour(12));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Outlook {
    client: PowerClient,
    cache: ForecastCache,
}

#[bon]
impl Outlook {
    /// Creates a client that caches outlooks in `cache_folder`.
    ///
    /// # Errors
    ///
    /// Returns [`OutlookError::CacheDirCreation`] if the directory cannot be created.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, OutlookError> {
        Self::with_client(PowerClient::new(), cache_folder).await
    }

    /// Creates a client using the platform cache directory.
    ///
    /// # Errors
    ///
    /// Returns [`OutlookError::CacheDirResolution`] if there is no cache directory
    /// on this platform, or [`OutlookError::CacheDirCreation`] if it cannot be created.
    pub async fn new() -> Result<Self, OutlookError> {
        let cache_folder = get_cache_dir().map_err(OutlookError::CacheDirResolution)?;
        Self::with_cache_folder(cache_folder).await
    }

    /// Creates a client with a custom [`PowerClient`], e.g. one pointed at a mirror.
    pub async fn with_client(
        client: PowerClient,
        cache_folder: PathBuf,
    ) -> Result<Self, OutlookError> {
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| OutlookError::CacheDirCreation(cache_folder.clone(), e))?;
        Ok(Self {
            client,
            cache: ForecastCache::new(&cache_folder),
        })
    }

    /// Builds the outlook for the UTC calendar day of `unix_time` at `location`.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** Where to build the outlook for.
    /// * `.unix_time(i64)`: **Required.** Any moment of the requested day, in seconds.
    /// * `.start_year(i32)`: Optional. First historical year. Defaults to 2001.
    /// * `.end_year(i32)`: Optional. Last historical year. Defaults to 2024.
    ///
    /// # Errors
    ///
    /// * [`OutlookError::Power`] if the day is out of range, a download fails or
    ///   the cache cannot be read or written.
    /// * [`OutlookError::Prediction`] if the observations cannot be reduced.
    #[builder]
    pub async fn forecast(
        &self,
        location: LatLon,
        unix_time: i64,
        #[builder(default = START_YEAR)] start_year: i32,
        #[builder(default = END_YEAR)] end_year: i32,
    ) -> Result<ForecastSeries, OutlookError> {
        let request = ForecastRequest::new(unix_time, location);
        let day = request.day()?;
        let years = start_year..=end_year;
        let file_name = ForecastCache::file_name(day, location, &years);

        if let Some(series) = self.cache.get(&file_name).await? {
            info!("Cache hit for outlook {}", file_name);
            return Ok(series);
        }
        warn!(
            "Cache miss for outlook {}. Downloading and processing.",
            file_name
        );

        let responses = self.client.fetch_day(location, day, years).await?;
        let series = tokio::task::spawn_blocking(move || build_series(&responses)).await??;
        self.cache.put(&file_name, &series).await?;
        Ok(series)
    }

    /// Removes every cached outlook. Returns how many were removed.
    pub async fn clear_cache(&self) -> Result<usize, OutlookError> {
        Ok(self.cache.clear().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::error::PowerError;
    use crate::types::forecast_series::HOURS_PER_DAY;
    use crate::types::hourly_record::HourlyRecord;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    const JULY_15_2030: i64 = 1_910_304_000;

    #[tokio::test]
    async fn test_cached_outlook_skips_download() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        // Nothing listens here, so any download attempt would fail.
        let client = PowerClient::with_base_url("http://127.0.0.1:9/unused");
        let outlook = Outlook::with_client(client, dir.path().to_path_buf()).await?;

        let location = LatLon(41.711033, 44.758182);
        let day = NaiveDate::from_ymd_opt(2030, 7, 15).unwrap();
        let file_name = ForecastCache::file_name(day, location, &(START_YEAR..=END_YEAR));
        let mut records = [HourlyRecord::default(); HOURS_PER_DAY];
        records[12].measurements.temperature = 27.5;
        let expected = ForecastSeries::from(records);
        ForecastCache::new(dir.path()).put(&file_name, &expected).await?;

        let series = outlook
            .forecast()
            .location(location)
            .unix_time(JULY_15_2030)
            .call()
            .await?;
        assert_eq!(series, expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_download_failure_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let client = PowerClient::with_base_url("http://127.0.0.1:9/unused");
        let outlook = Outlook::with_client(client, dir.path().to_path_buf()).await?;

        let result = outlook
            .forecast()
            .location(LatLon(0.0, 0.0))
            .unix_time(JULY_15_2030)
            .start_year(2020)
            .end_year(2020)
            .call()
            .await;
        assert!(matches!(
            result,
            Err(OutlookError::Power(PowerError::NetworkRequest(..)))
        ));
        assert_eq!(outlook.clear_cache().await?, 0);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "queries the live NASA POWER API"]
    async fn test_live_outlook() -> Result<(), OutlookError> {
        let dir = tempdir().map_err(OutlookError::CacheDirResolution)?;
        let outlook = Outlook::with_cache_folder(dir.path().to_path_buf()).await?;
        let series = outlook
            .forecast()
            .location(LatLon(41.711033, 44.758182))
            .unix_time(JULY_15_2030)
            .start_year(2020)
            .end_year(2023)
            .call()
            .await?;

        assert!(series.iter().any(|r| r.measurements.temperature != 0.0));
        assert_eq!(outlook.clear_cache().await?, 1);
        Ok(())
    }
}
