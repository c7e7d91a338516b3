//! On-disk cache of computed outlooks, one bincode file per day and place.

use crate::power::error::PowerError;
use crate::power::request::day_key;
use crate::types::forecast_series::ForecastSeries;
use crate::types::location::LatLon;
use bincode::config::{Configuration, Fixint, LittleEndian};
use chrono::NaiveDate;
use log::debug;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tokio::fs;

const CACHE_FILE_PREFIX: &str = "outlook-";
const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

#[derive(Debug, Clone)]
pub struct ForecastCache {
    dir: PathBuf,
}

impl ForecastCache {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// File name for an outlook. Coordinates are rounded to 4 decimals
    /// (about 10 m), far below the resolution of the source grid.
    pub fn file_name(day: NaiveDate, location: LatLon, years: &RangeInclusive<i32>) -> String {
        format!(
            "{}{}-{:.4}-{:.4}-{}-{}.bin",
            CACHE_FILE_PREFIX,
            day_key(day),
            location.latitude(),
            location.longitude(),
            years.start(),
            years.end()
        )
    }

    pub async fn get(&self, file_name: &str) -> Result<Option<ForecastSeries>, PowerError> {
        let path = self.dir.join(file_name);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PowerError::CacheRead(path, e)),
        };
        let (series, _) = bincode::serde::decode_from_slice::<ForecastSeries, _>(
            &bytes,
            BINCODE_CONFIG,
        )
        .map_err(|e| PowerError::CacheDecode(path, Box::from(e)))?;
        Ok(Some(series))
    }

    pub async fn put(&self, file_name: &str, series: &ForecastSeries) -> Result<(), PowerError> {
        let path = self.dir.join(file_name);
        let bytes = bincode::serde::encode_to_vec(series, BINCODE_CONFIG)
            .map_err(|e| PowerError::CacheEncode(Box::from(e)))?;
        fs::write(&path, bytes)
            .await
            .map_err(|e| PowerError::CacheWrite(path.clone(), e))?;
        debug!("Cached outlook at {}", path.display());
        Ok(())
    }

    /// Removes every cached outlook, leaving other files in the directory alone.
    /// Returns how many were removed.
    pub async fn clear(&self) -> Result<usize, PowerError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(PowerError::CacheDeletion(self.dir.clone(), e)),
        };
        let mut removed = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| PowerError::CacheDeletion(self.dir.clone(), e))?
        {
            let is_outlook = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(CACHE_FILE_PREFIX));
            if is_outlook {
                let path = entry.path();
                fs::remove_file(&path)
                    .await
                    .map_err(|e| PowerError::CacheDeletion(path, e))?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::forecast_series::HOURS_PER_DAY;
    use crate::types::hourly_record::HourlyRecord;
    use tempfile::tempdir;

    fn series() -> ForecastSeries {
        let mut records = [HourlyRecord::default(); HOURS_PER_DAY];
        for (hour, record) in records.iter_mut().enumerate() {
            record.measurements.temperature = hour as f64 - 3.5;
            record.probabilities.very_cold = 0.25;
        }
        ForecastSeries::from(records)
    }

    #[test]
    fn test_file_name() {
        let day = NaiveDate::from_ymd_opt(2030, 7, 1).unwrap();
        let name = ForecastCache::file_name(day, LatLon(41.711033, 44.758182), &(2001..=2024));
        assert_eq!(name, "outlook-0701-41.7110-44.7582-2001-2024.bin");
    }

    #[tokio::test]
    async fn test_put_then_get() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let cache = ForecastCache::new(dir.path());

        assert_eq!(cache.get("outlook-a.bin").await?, None);
        cache.put("outlook-a.bin", &series()).await?;
        assert_eq!(cache.get("outlook-a.bin").await?, Some(series()));
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_file_is_decode_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        std::fs::write(dir.path().join("outlook-bad.bin"), [1u8, 2, 3])?;
        let cache = ForecastCache::new(dir.path());

        let result = cache.get("outlook-bad.bin").await;
        assert!(matches!(result, Err(PowerError::CacheDecode(..))));
        Ok(())
    }

    #[tokio::test]
    async fn test_clear_only_removes_outlooks() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let cache = ForecastCache::new(dir.path());
        cache.put("outlook-a.bin", &series()).await?;
        cache.put("outlook-b.bin", &series()).await?;
        std::fs::write(dir.path().join("notes.txt"), "keep")?;

        assert_eq!(cache.clear().await?, 2);
        assert!(dir.path().join("notes.txt").exists());
        assert_eq!(cache.get("outlook-a.bin").await?, None);
        Ok(())
    }
}
