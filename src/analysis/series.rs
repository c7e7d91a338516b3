//! Pulls one measurement out of every hour, in hour order, for charting.

use crate::analysis::error::SeriesError;
use crate::types::field::FieldName;
use crate::types::forecast_series::{ForecastSeries, HOURS_PER_DAY};

/// Values of `field` for hours 0 to 23.
pub fn extract(series: &ForecastSeries, field: FieldName) -> [f64; HOURS_PER_DAY] {
    let records = series.records();
    std::array::from_fn(|hour| field.read(&records[hour].measurements))
}

/// Like [`extract`], with the field given by its UI identifier.
///
/// # Errors
///
/// Returns [`SeriesError::UnknownField`] if `field` is not one of
/// `temperature`, `precipitation` or `wind_speed`.
pub fn extract_named(
    series: &ForecastSeries,
    field: &str,
) -> Result<[f64; HOURS_PER_DAY], SeriesError> {
    let field: FieldName = field.parse()?;
    Ok(extract(series, field))
}
