//! Error types for the forecast_core crate

use forecast_math::MathError;
use thiserror::Error;

/// Custom error types for the forecast_core crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A caller-supplied argument is out of its valid range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An index past the end of a series
    #[error("Index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Failure inside a model or distribution collaborator
    #[error("Computation error: {0}")]
    ComputationError(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from a statistical calculation
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl ForecastError {
    /// Map a math error raised while checking caller arguments.
    ///
    /// Rejected inputs become [`ForecastError::InvalidArgument`]; anything else
    /// is passed through unchanged.
    pub(crate) fn from_argument_check(err: MathError) -> Self {
        match err {
            MathError::InvalidInput(msg) => ForecastError::InvalidArgument(msg),
            other => ForecastError::Math(other),
        }
    }
}
