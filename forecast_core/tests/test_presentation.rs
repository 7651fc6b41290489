use chrono::{TimeZone, Utc};
use forecast_core::models::{Forecast, RandomWalk, RandomWalkForecast};
use forecast_core::presentation::{Chart, ChartSink, ChartView, JsonChartSink};
use forecast_core::{ForecastError, Result, TimeScale, TimeSeries};
use pretty_assertions::assert_eq;
use std::sync::mpsc;
use std::sync::Arc;

fn forecast() -> RandomWalkForecast<RandomWalk> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let series = TimeSeries::new(TimeScale::Day, start, 1, vec![5.0, 6.0, 5.5, 7.0, 6.5]).unwrap();
    let model = Arc::new(RandomWalk::fit(series).unwrap());
    RandomWalkForecast::new(model, 3, 0.05).unwrap()
}

/// Sends every chart it receives over a channel
struct ChannelSink(mpsc::Sender<Chart>);

impl ChartSink for ChannelSink {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        self.0
            .send(chart.clone())
            .map_err(|e| ForecastError::ComputationError(e.to_string()))
    }
}

/// Always fails to render
struct FailingSink;

impl ChartSink for FailingSink {
    fn render(&mut self, _chart: &Chart) -> Result<()> {
        Err(ForecastError::ComputationError("display unavailable".to_string()))
    }
}

#[test]
fn test_forecast_only_chart() {
    let forecast = forecast();
    let chart = forecast.chart(ChartView::ForecastOnly).unwrap();

    assert_eq!(chart.title, "Random Walk Forecast");
    assert_eq!((chart.width, chart.height), (800, 600));
    assert_eq!(chart.series.len(), 1);

    let line = chart.series("Forecast").unwrap();
    assert_eq!(line.values, forecast.point_forecast().values().to_vec());
    assert_eq!(line.times, forecast.point_forecast().observation_times().to_vec());
    assert_eq!(line.errors, Some(forecast.errors()));
}

#[test]
fn test_past_and_future_chart() {
    let forecast = forecast();
    let chart = forecast.chart(ChartView::PastAndFuture).unwrap();

    assert_eq!(chart.title, "Random Walk Past and Future");
    assert_eq!((chart.width, chart.height), (1200, 800));

    let past = chart.series("Past").unwrap();
    assert_eq!(past.values, vec![5.0, 6.0, 5.5, 7.0, 6.5]);
    assert_eq!(past.errors, None);

    let future = chart.series("Future").unwrap();
    assert_eq!(future.values, vec![6.5; 3]);
    assert!(future.times[0] > *past.times.last().unwrap());
}

#[test]
fn test_plot_renders_on_background_thread() {
    let forecast = forecast();
    let (tx, rx) = mpsc::channel();

    let handle = forecast.plot(ChannelSink(tx)).unwrap();
    handle.join().unwrap().unwrap();

    let chart = rx.recv().unwrap();
    assert_eq!(chart, forecast.chart(ChartView::ForecastOnly).unwrap());
}

#[test]
fn test_past_and_future_writes_json() {
    let forecast = forecast();

    let sink = forecast
        .past_and_future(JsonChartSink::new(Vec::new()))
        .unwrap()
        .join()
        .unwrap()
        .unwrap();

    let written: Chart = serde_json::from_slice(&sink.into_inner()).unwrap();
    assert_eq!(written.view, ChartView::PastAndFuture);
    assert_eq!(written.series.len(), 2);
}

#[test]
fn test_render_failure_is_reported_by_handle() {
    let forecast = forecast();
    let result = forecast.plot(FailingSink).unwrap().join().unwrap();

    assert!(matches!(result, Err(ForecastError::ComputationError(_))));
    // Rendering never changes the forecast
    assert_eq!(forecast.point_forecast().values(), &[6.5; 3]);
}
