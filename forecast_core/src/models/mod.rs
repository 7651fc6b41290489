//! Forecasting models and the forecasts built from them

use crate::data::TimeSeries;
use crate::error::Result;
use crate::presentation::{Chart, ChartView};
use std::fmt::Debug;

/// A model already fitted to a series
pub trait Model: Debug + Send + Sync {
    /// The series the model was fitted on
    fn time_series(&self) -> &TimeSeries;

    /// In-sample fitted values, aligned with [`Model::time_series`]
    fn fitted_series(&self) -> &TimeSeries;

    /// In-sample residuals (observed minus fitted)
    fn residuals(&self) -> &TimeSeries;

    /// Standard deviation of the residuals
    fn residual_std_dev(&self) -> f64;

    /// Forecast `steps` periods past the last observation, keeping the time
    /// scale and period length of the fitted series
    fn point_forecast(&self, steps: usize) -> Result<TimeSeries>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// A forecast with prediction intervals
pub trait Forecast {
    /// The point forecast
    fn point_forecast(&self) -> &TimeSeries;

    /// Upper bound of the `1 - alpha` prediction interval over the first
    /// `steps` periods
    fn upper_prediction_interval(&self, steps: usize, alpha: f64) -> Result<TimeSeries>;

    /// Lower bound of the `1 - alpha` prediction interval over the first
    /// `steps` periods
    fn lower_prediction_interval(&self, steps: usize, alpha: f64) -> Result<TimeSeries>;

    /// Snapshot of the forecast for a chart renderer
    fn chart(&self, view: ChartView) -> Result<Chart>;
}

pub mod random_walk;
pub mod random_walk_forecast;

pub use random_walk::RandomWalk;
pub use random_walk_forecast::RandomWalkForecast;
