use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("No yearly observations to build an outlook from")]
    NoData,

    #[error("Failed processing observations: {0}")]
    Frame(#[from] PolarsError),
}
