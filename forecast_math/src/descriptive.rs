//! Descriptive statistics over plain `f64` slices

use crate::{MathError, Result};

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty sequence".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (n - 1 denominator)
pub fn variance(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(MathError::InsufficientData(format!(
            "Sample variance needs at least 2 values, got {}",
            values.len()
        )));
    }

    let m = mean(values)?;
    let sum_sq = values.iter().map(|&x| (x - m).powi(2)).sum::<f64>();

    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation
pub fn std_dev(values: &[f64]) -> Result<f64> {
    Ok(variance(values)?.sqrt())
}

/// First differences `y[t] - y[t-1]`
pub fn differences(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return Vec::new();
    }

    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Standard error multiplier of a random walk at zero-based horizon `step`.
///
/// Increments are i.i.d., so the forecast-error variance at horizon `step + 1`
/// is `(step + 1)` times the one-step variance.
pub fn horizon_scale(step: usize) -> f64 {
    ((step + 1) as f64).sqrt()
}
