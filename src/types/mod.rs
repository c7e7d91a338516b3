pub mod comfort_label;
pub mod field;
pub mod forecast_series;
pub mod hourly_record;
pub mod location;
pub mod summary_stats;
