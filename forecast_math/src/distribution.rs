//! Normal quantiles for prediction intervals
//!
//! [`NormalDistribution`] is the quantile provider behind every interval in the
//! forecasting crates. The standard-normal inverse CDF comes from `statrs`; the
//! location/scale transform is applied here so that a zero standard deviation
//! (a point mass) is accepted rather than rejected.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// A distribution that can report the value below which a given probability
/// mass lies.
pub trait Quantile {
    /// Returns `x` such that `P(X <= x) = p`
    fn quantile(&self, p: f64) -> Result<f64>;
}

/// Normal distribution parameterised by mean and standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalDistribution {
    mean: f64,
    std_dev: f64,
}

impl NormalDistribution {
    /// Create a new normal distribution.
    ///
    /// `std_dev` may be zero, in which case every quantile equals `mean`.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(MathError::InvalidInput(format!(
                "Mean must be finite, got {}",
                mean
            )));
        }

        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(MathError::InvalidInput(format!(
                "Standard deviation must be finite and non-negative, got {}",
                std_dev
            )));
        }

        Ok(Self { mean, std_dev })
    }

    /// Standard normal distribution (mean 0, standard deviation 1)
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Get the mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Quantile for NormalDistribution {
    fn quantile(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(MathError::InvalidInput(format!(
                "Probability must be strictly between 0 and 1, got {}",
                p
            )));
        }

        if self.std_dev == 0.0 {
            return Ok(self.mean);
        }

        let z = Normal::new(0.0, 1.0)?.inverse_cdf(p);
        if !z.is_finite() {
            return Err(MathError::CalculationError(format!(
                "Normal quantile at p = {} is not finite",
                p
            )));
        }

        Ok(self.mean + self.std_dev * z)
    }
}

/// Two-sided critical value for confidence level `1 - alpha`.
///
/// This is the `1 - alpha / 2` quantile of `Normal(0, std_dev)`, taken by
/// symmetry as the negated `alpha / 2` quantile. `1 - alpha / 2` rounds to 1.0
/// once `alpha` drops below machine epsilon.
pub fn critical_value(std_dev: f64, alpha: f64) -> Result<f64> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(MathError::InvalidInput(format!(
            "Alpha must be strictly between 0 and 1, got {}",
            alpha
        )));
    }

    let normal = NormalDistribution::new(0.0, std_dev)?;
    if normal.std_dev() == 0.0 {
        return Ok(0.0);
    }

    Ok(-normal.quantile(alpha / 2.0)?)
}
