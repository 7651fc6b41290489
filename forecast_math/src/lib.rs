//! # Forecast Math
//!
//! Statistical building blocks shared by the forecasting crates.
//!
//! - [`descriptive`]: mean, sample variance, differencing and the random-walk
//!   horizon scale
//! - [`distribution`]: the normal quantile provider used to derive critical
//!   values for prediction intervals

use thiserror::Error;

pub mod descriptive;
pub mod distribution;

pub use descriptive::{differences, horizon_scale, mean, std_dev, variance};
pub use distribution::{critical_value, NormalDistribution, Quantile};

/// Errors that can occur in statistical calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error("Distribution error: {0}")]
    Distribution(#[from] statrs::StatsError),
}

/// Result type for statistical operations
pub type Result<T> = std::result::Result<T, MathError>;
