//! Forecast configuration

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Horizon and significance level for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future periods to forecast
    pub steps: usize,
    /// Significance level; intervals cover `1 - alpha`
    pub alpha: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            steps: 12,
            alpha: 0.05,
        }
    }
}

impl ForecastConfig {
    /// Create a validated configuration
    pub fn new(steps: usize, alpha: f64) -> Result<Self> {
        let config = Self { steps, alpha };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `steps` and `alpha` are usable
    pub fn validate(&self) -> Result<()> {
        validate_steps(self.steps)?;
        validate_alpha(self.alpha)
    }

    /// Confidence level covered by the prediction intervals
    pub fn confidence_level(&self) -> f64 {
        1.0 - self.alpha
    }
}

pub(crate) fn validate_steps(steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(ForecastError::InvalidArgument(
            "Steps must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    // NaN fails both comparisons
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ForecastError::InvalidArgument(format!(
            "Alpha must be strictly between 0 and 1, got {}",
            alpha
        )));
    }
    Ok(())
}
