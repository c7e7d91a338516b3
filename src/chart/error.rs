use crate::analysis::error::SeriesError;
use crate::types::field::FieldName;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("Failed to draw {field} chart: {message}")]
    Drawing { field: FieldName, message: String },

    #[error("Failed to write chart to '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to remove chart '{0}'")]
    Remove(PathBuf, #[source] std::io::Error),
}
