use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Malformed forecast series: {reason}")]
    MalformedSeries { reason: String },

    #[error("Unknown field '{0}', expected one of temperature, precipitation, wind_speed")]
    UnknownField(String),

    #[error("Failed to decode forecast dataset")]
    Decode(#[from] serde_json::Error),
}

impl SeriesError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SeriesError::MalformedSeries {
            reason: reason.into(),
        }
    }
}
