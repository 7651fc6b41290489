//! Random walk model
//!
//! Each observation is predicted by the one before it. The residuals are
//! therefore the first differences of the series, with a leading zero for the
//! first observation, which has no predecessor.

use crate::data::{TimeScale, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::Model;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, warn};

/// Random walk model fitted to a series
#[derive(Debug, Clone)]
pub struct RandomWalk {
    /// Name of the model
    name: String,
    /// Series the model was fitted on
    observed: TimeSeries,
    /// One-step-ahead fitted values
    fitted: TimeSeries,
    /// Observed minus fitted
    residuals: TimeSeries,
    /// Sample standard deviation of the residuals
    residual_std_dev: f64,
}

impl RandomWalk {
    /// Fit a random walk to the observed series
    pub fn fit(observed: TimeSeries) -> Result<Self> {
        if observed.len() < 2 {
            return Err(ForecastError::InvalidArgument(format!(
                "Random walk needs at least 2 observations, got {}",
                observed.len()
            )));
        }

        let values = observed.values();

        let mut fitted_values = Vec::with_capacity(values.len());
        fitted_values.push(values[0]);
        fitted_values.extend_from_slice(&values[..values.len() - 1]);

        let mut residual_values = Vec::with_capacity(values.len());
        residual_values.push(0.0);
        residual_values.extend(forecast_math::differences(values));

        let residual_std_dev = forecast_math::std_dev(&residual_values)?;
        if !residual_std_dev.is_finite() {
            return Err(ForecastError::InvalidArgument(
                "Observed series contains non-finite values".to_string(),
            ));
        }

        let times = observed.observation_times().to_vec();
        let fitted = TimeSeries::from_observations(
            observed.time_scale(),
            observed.period_length(),
            times.clone(),
            fitted_values,
        )?;
        let residuals = TimeSeries::from_observations(
            observed.time_scale(),
            observed.period_length(),
            times,
            residual_values,
        )?;

        debug!(
            observations = observed.len(),
            residual_std_dev, "fitted random walk"
        );
        if residual_std_dev == 0.0 {
            warn!("random walk residuals have zero dispersion; prediction intervals will collapse");
        }

        Ok(Self {
            name: "Random Walk".to_string(),
            observed,
            fitted,
            residuals,
            residual_std_dev,
        })
    }

    /// Simulate a random walk path of `n` observations.
    ///
    /// `y[0] = initial` and every later value adds an independent
    /// `Normal(0, sigma)` increment to its predecessor.
    pub fn simulate<R: Rng + ?Sized>(
        start: DateTime<Utc>,
        time_scale: TimeScale,
        period_length: u32,
        initial: f64,
        sigma: f64,
        n: usize,
        rng: &mut R,
    ) -> Result<TimeSeries> {
        if n == 0 {
            return Err(ForecastError::InvalidArgument(
                "Simulated path needs at least one observation".to_string(),
            ));
        }
        if !initial.is_finite() {
            return Err(ForecastError::InvalidArgument(format!(
                "Initial value must be finite, got {}",
                initial
            )));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(ForecastError::InvalidArgument(format!(
                "Increment standard deviation must be finite and non-negative, got {}",
                sigma
            )));
        }

        let increments = Normal::new(0.0, sigma)
            .map_err(|e| ForecastError::ComputationError(e.to_string()))?;

        let mut values = Vec::with_capacity(n);
        let mut level = initial;
        values.push(level);
        for _ in 1..n {
            level += increments.sample(rng);
            values.push(level);
        }

        TimeSeries::new(time_scale, start, period_length, values)
    }
}

impl Model for RandomWalk {
    fn time_series(&self) -> &TimeSeries {
        &self.observed
    }

    fn fitted_series(&self) -> &TimeSeries {
        &self.fitted
    }

    fn residuals(&self) -> &TimeSeries {
        &self.residuals
    }

    fn residual_std_dev(&self) -> f64 {
        self.residual_std_dev
    }

    fn point_forecast(&self, steps: usize) -> Result<TimeSeries> {
        if steps == 0 {
            return Err(ForecastError::InvalidArgument(
                "Steps must be a positive integer".to_string(),
            ));
        }

        let last = self.observed.at(self.observed.len() - 1)?;
        let start = self.observed.next_period_start()?;

        TimeSeries::new(
            self.observed.time_scale(),
            start,
            self.observed.period_length(),
            vec![last; steps],
        )
    }

    fn name(&self) -> &str {
        &self.name
    }
}
