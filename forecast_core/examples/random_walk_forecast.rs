//! Simulate a random walk, fit it, and print the forecast with 95% intervals.
//!
//! Run with `RUST_LOG=debug` to see the library's tracing output.

use chrono::{TimeZone, Utc};
use forecast_core::models::{Forecast, RandomWalk, RandomWalkForecast};
use forecast_core::presentation::JsonChartSink;
use forecast_core::{ForecastConfig, Model, TimeScale};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let history = RandomWalk::simulate(start, TimeScale::Day, 1, 100.0, 1.5, 60, &mut rng)?;

    let model = Arc::new(RandomWalk::fit(history)?);
    println!("Residual std dev: {:.4}", model.residual_std_dev());

    let config = ForecastConfig::new(10, 0.05)?;
    let forecast = RandomWalkForecast::from_config(model, &config)?;

    println!("{:<12} {:>10} {:>10} {:>10}", "date", "lower", "forecast", "upper");
    let point = forecast.point_forecast();
    for t in 0..point.len() {
        println!(
            "{:<12} {:>10.3} {:>10.3} {:>10.3}",
            point.observation_times()[t].format("%Y-%m-%d"),
            forecast.lower_interval().at(t)?,
            point.at(t)?,
            forecast.upper_interval().at(t)?,
        );
    }

    let handle = forecast.past_and_future(JsonChartSink::new(std::io::sink()))?;
    handle.join().map_err(|_| "render thread panicked")??;

    Ok(())
}
