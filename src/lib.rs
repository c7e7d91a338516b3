//! Hourly weather outlooks for a chosen day and place.
//!
//! A [`ForecastSeries`] holds 24 hourly records of expected measurements and
//! adverse-weather probabilities. From it this crate derives day-level
//! [`SummaryStats`], a single [`ComfortLabel`], and hourly charts drawn onto a
//! [`ChartSurface`]. [`Outlook`] produces the series itself from NASA POWER
//! observations of the same calendar day in past years.

mod analysis;
mod chart;
mod display;
mod error;
mod outlook;
mod power;
mod prediction;
mod types;
mod utils;

pub use error::OutlookError;
pub use outlook::*;

pub use analysis::aggregator::{aggregate, aggregate_records};
pub use analysis::comfort::classify;
pub use analysis::error::SeriesError;
pub use analysis::series::{extract, extract_named};

pub use chart::error::ChartError;
pub use chart::renderer::{ChartRenderer, ChartState};
pub use chart::spec::ChartSpec;
pub use chart::surface::ChartSurface;
pub use chart::svg::{SvgChart, SvgSurface};

pub use display::controller::DisplayController;
pub use display::view_model::*;

pub use power::cache::ForecastCache;
pub use power::client::{PowerClient, END_YEAR, POWER_HOURLY_API, START_YEAR};
pub use power::error::PowerError;
pub use power::request::ForecastRequest;
pub use power::response::{PowerParameters, PowerProperties, PowerResponse, MISSING_VALUE};

pub use prediction::builder::{
    build_series, COLD_THRESHOLD, HOT_THRESHOLD, WET_THRESHOLD, WINDY_THRESHOLD,
};
pub use prediction::error::PredictionError;

pub use types::comfort_label::ComfortLabel;
pub use types::field::FieldName;
pub use types::forecast_series::{ForecastSeries, HOURS_PER_DAY};
pub use types::hourly_record::{HourlyRecord, Measurements, Probabilities};
pub use types::location::LatLon;
pub use types::summary_stats::SummaryStats;
