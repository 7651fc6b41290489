//! # Forecast Core
//!
//! Random-walk forecasting with normal prediction intervals.
//!
//! ## Features
//!
//! - Time-indexed series with a time scale and period length ([`TimeSeries`])
//! - CSV loading ([`DataLoader`])
//! - A fitted random walk model ([`RandomWalk`]) behind the [`Model`] trait
//! - Point forecasts with intervals that widen with the square root of the
//!   horizon ([`RandomWalkForecast`]) behind the [`Forecast`] trait
//! - Chart snapshots rendered on background threads ([`presentation`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use forecast_core::data::{DataLoader, TimeScale};
//! use forecast_core::models::{Forecast, RandomWalk, RandomWalkForecast};
//!
//! # fn main() -> forecast_core::Result<()> {
//! let series = DataLoader::from_csv("prices.csv", TimeScale::Day, 1)?;
//! let model = Arc::new(RandomWalk::fit(series)?);
//!
//! // 12 days ahead with 95% intervals
//! let forecast = RandomWalkForecast::new(model, 12, 0.05)?;
//! let upper = forecast.upper_prediction_interval(12, 0.05)?;
//! let lower = forecast.lower_prediction_interval(12, 0.05)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod presentation;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::{DataLoader, TimeScale, TimeSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{Forecast, Model, RandomWalk, RandomWalkForecast};
pub use crate::presentation::{Chart, ChartSeries, ChartSink, ChartView, JsonChartSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
