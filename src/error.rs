use crate::analysis::error::SeriesError;
use crate::chart::error::ChartError;
use crate::power::error::PowerError;
use crate::prediction::error::PredictionError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutlookError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Power(#[from] PowerError),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
