//! # tsforecast
//!
//! Single entry point for the forecasting workspace: the random walk model,
//! its prediction intervals, and the statistics underneath.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use tsforecast_workspace::{Forecast, RandomWalk, RandomWalkForecast, TimeScale, TimeSeries};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let series = TimeSeries::new(TimeScale::Month, start, 1, vec![10.0, 12.0, 11.0, 13.0]).unwrap();
//! let model = Arc::new(RandomWalk::fit(series).unwrap());
//!
//! let forecast = RandomWalkForecast::new(model, 3, 0.05).unwrap();
//! assert_eq!(forecast.point_forecast().values(), &[13.0, 13.0, 13.0]);
//! ```

pub use forecast_core::{
    config, data, error, models, presentation, Chart, ChartSeries, ChartSink, ChartView,
    DataLoader, Forecast, ForecastConfig, ForecastError, Model, RandomWalk, RandomWalkForecast,
    Result, TimeScale, TimeSeries,
};
pub use forecast_math::{self as math, critical_value, NormalDistribution, Quantile};
