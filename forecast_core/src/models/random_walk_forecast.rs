//! Random walk forecast with normal prediction intervals
//!
//! Under a random walk the forecast-error variance after `h` periods is
//! `h * sigma^2`, so the interval half-width at zero-based step `t` is
//! `z * sqrt(t + 1)`, where `z` is the two-sided normal critical value scaled
//! by the residual standard deviation.
//!
//! Everything is computed once in [`RandomWalkForecast::new`]; the value is
//! immutable afterwards and can be read from any thread.

use crate::config::{validate_alpha, validate_steps, ForecastConfig};
use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::{Forecast, Model};
use crate::presentation::{spawn_render, Chart, ChartSeries, ChartSink, ChartView};
use forecast_math::{critical_value, horizon_scale};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::debug;

/// Point forecast and prediction intervals from a fitted random walk
#[derive(Debug)]
pub struct RandomWalkForecast<M: Model> {
    model: Arc<M>,
    forecast: TimeSeries,
    upper_interval: TimeSeries,
    lower_interval: TimeSeries,
    steps: usize,
    alpha: f64,
    critical_value: f64,
}

impl<M: Model> RandomWalkForecast<M> {
    /// Forecast `steps` periods ahead with `1 - alpha` prediction intervals
    pub fn new(model: Arc<M>, steps: usize, alpha: f64) -> Result<Self> {
        validate_steps(steps)?;
        validate_alpha(alpha)?;
        validate_model(model.as_ref())?;

        let forecast = model.point_forecast(steps)?;
        if forecast.len() != steps {
            return Err(ForecastError::ComputationError(format!(
                "{} produced {} forecast values for {} steps",
                model.name(),
                forecast.len(),
                steps
            )));
        }

        let std_dev = model.residual_std_dev();
        let critical_value = interval_critical_value(std_dev, alpha)?;
        let upper_interval = prediction_interval(&forecast, std_dev, steps, alpha, Bound::Upper)?;
        let lower_interval = prediction_interval(&forecast, std_dev, steps, alpha, Bound::Lower)?;

        debug!(
            model = model.name(),
            steps,
            alpha,
            critical_value,
            "built random walk forecast"
        );

        Ok(Self {
            model,
            forecast,
            upper_interval,
            lower_interval,
            steps,
            alpha,
            critical_value,
        })
    }

    /// Forecast using the horizon and significance level of `config`
    pub fn from_config(model: Arc<M>, config: &ForecastConfig) -> Result<Self> {
        Self::new(model, config.steps, config.alpha)
    }

    /// The fitted model behind the forecast
    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    /// Forecast horizon
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Significance level of the stored intervals
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Critical value used for the stored intervals
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Upper bound computed at construction
    pub fn upper_interval(&self) -> &TimeSeries {
        &self.upper_interval
    }

    /// Lower bound computed at construction
    pub fn lower_interval(&self) -> &TimeSeries {
        &self.lower_interval
    }

    /// Interval half-width at each forecast step
    pub fn errors(&self) -> Vec<f64> {
        (0..self.forecast.len())
            .map(|t| self.critical_value * horizon_scale(t))
            .collect()
    }

    /// Render the forecast alone on a background thread
    pub fn plot<S: ChartSink>(&self, sink: S) -> Result<JoinHandle<Result<S>>> {
        let chart = self.chart(ChartView::ForecastOnly)?;
        Ok(spawn_render(chart, sink))
    }

    /// Render the observed history followed by the forecast on a background
    /// thread
    pub fn past_and_future<S: ChartSink>(&self, sink: S) -> Result<JoinHandle<Result<S>>> {
        let chart = self.chart(ChartView::PastAndFuture)?;
        Ok(spawn_render(chart, sink))
    }
}

impl<M: Model> Forecast for RandomWalkForecast<M> {
    fn point_forecast(&self) -> &TimeSeries {
        &self.forecast
    }

    fn upper_prediction_interval(&self, steps: usize, alpha: f64) -> Result<TimeSeries> {
        prediction_interval(
            &self.forecast,
            self.model.residual_std_dev(),
            steps,
            alpha,
            Bound::Upper,
        )
    }

    fn lower_prediction_interval(&self, steps: usize, alpha: f64) -> Result<TimeSeries> {
        prediction_interval(
            &self.forecast,
            self.model.residual_std_dev(),
            steps,
            alpha,
            Bound::Lower,
        )
    }

    fn chart(&self, view: ChartView) -> Result<Chart> {
        let future = ChartSeries::with_errors(
            match view {
                ChartView::ForecastOnly => "Forecast",
                ChartView::PastAndFuture => "Future",
            },
            &self.forecast,
            self.errors(),
        )?;

        let series = match view {
            ChartView::ForecastOnly => vec![future],
            ChartView::PastAndFuture => {
                vec![ChartSeries::new("Past", self.model.time_series()), future]
            }
        };

        Ok(Chart::new(view, series))
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Upper,
    Lower,
}

impl Bound {
    fn sign(self) -> f64 {
        match self {
            Bound::Upper => 1.0,
            Bound::Lower => -1.0,
        }
    }
}

fn validate_model<M: Model>(model: &M) -> Result<()> {
    let std_dev = model.residual_std_dev();
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(ForecastError::InvalidArgument(format!(
            "{} has unusable residual standard deviation {}",
            model.name(),
            std_dev
        )));
    }

    if model.time_series().is_empty() {
        return Err(ForecastError::InvalidArgument(format!(
            "{} was fitted on an empty series",
            model.name()
        )));
    }

    Ok(())
}

fn interval_critical_value(std_dev: f64, alpha: f64) -> Result<f64> {
    critical_value(std_dev, alpha).map_err(ForecastError::from_argument_check)
}

/// One side of the prediction interval over the first `steps` forecast
/// periods, time-aligned with the forecast
fn prediction_interval(
    forecast: &TimeSeries,
    std_dev: f64,
    steps: usize,
    alpha: f64,
    bound: Bound,
) -> Result<TimeSeries> {
    validate_steps(steps)?;
    validate_alpha(alpha)?;

    if steps > forecast.len() {
        return Err(ForecastError::IndexOutOfRange {
            index: steps - 1,
            len: forecast.len(),
        });
    }

    let critical_value = interval_critical_value(std_dev, alpha)?;

    let values = (0..steps)
        .map(|t| -> Result<f64> {
            Ok(forecast.at(t)? + bound.sign() * critical_value * horizon_scale(t))
        })
        .collect::<Result<Vec<f64>>>()?;

    TimeSeries::from_observations(
        forecast.time_scale(),
        forecast.period_length(),
        forecast.observation_times()[..steps].to_vec(),
        values,
    )
}
