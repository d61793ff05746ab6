//! Error types for the forecast_view crate

use series_math::MathError;
use thiserror::Error;

/// Custom error types for the forecast_view crate
#[derive(Debug, Error)]
pub enum ViewError {
    /// Error from invalid parameters such as a zero stride or page size
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A date string that could not be parsed
    #[error("Invalid date {value:?} at {series} observation {index}")]
    InvalidDate {
        series: String,
        index: usize,
        value: String,
    },

    /// An operation that needs data was given an empty series
    #[error("Empty series: {0}")]
    EmptySeries(String),

    /// The history series is empty where a summary needs at least one value
    #[error("History series is empty")]
    EmptyHistory,

    /// Error related to data validation (lengths, ordering, overlap)
    #[error("Data error: {0}")]
    Data(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding a JSON payload
    #[error("JSON error: {0}")]
    Json(String),

    /// Error reading CSV input
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error from the series math helpers
    #[error("Math error: {0}")]
    Math(MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ViewError>;

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::Json(err.to_string())
    }
}

impl From<csv::Error> for ViewError {
    fn from(err: csv::Error) -> Self {
        ViewError::Csv(err.to_string())
    }
}

impl From<MathError> for ViewError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidInput(msg) => ViewError::InvalidArgument(msg),
            other => ViewError::Math(other),
        }
    }
}
