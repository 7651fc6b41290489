//! Chart snapshots and background rendering
//!
//! A [`Chart`] is an owned copy of everything a renderer needs. Rendering runs
//! on its own thread through [`spawn_render`], which moves the snapshot into
//! the thread; the forecast that produced it is never touched again.

use crate::data::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::thread::{self, JoinHandle};
use tracing::trace;

/// Which parts of a forecast to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartView {
    /// The point forecast with error bars
    ForecastOnly,
    /// The observed series followed by the point forecast with error bars
    PastAndFuture,
}

impl ChartView {
    /// Window title
    pub fn title(&self) -> &'static str {
        match self {
            ChartView::ForecastOnly => "Random Walk Forecast",
            ChartView::PastAndFuture => "Random Walk Past and Future",
        }
    }

    /// Width and height in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ChartView::ForecastOnly => (800, 600),
            ChartView::PastAndFuture => (1200, 800),
        }
    }
}

/// One line on a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub times: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
    /// Symmetric error bar half-widths, one per value
    pub errors: Option<Vec<f64>>,
}

impl ChartSeries {
    /// A plain line drawn from a series
    pub fn new(name: &str, series: &TimeSeries) -> Self {
        Self {
            name: name.to_string(),
            times: series.observation_times().to_vec(),
            values: series.values().to_vec(),
            errors: None,
        }
    }

    /// A line with error bars
    pub fn with_errors(name: &str, series: &TimeSeries, errors: Vec<f64>) -> Result<Self> {
        if errors.len() != series.len() {
            return Err(ForecastError::DataError(format!(
                "Errors length ({}) doesn't match series length ({})",
                errors.len(),
                series.len()
            )));
        }

        Ok(Self {
            errors: Some(errors),
            ..Self::new(name, series)
        })
    }
}

/// Everything needed to draw a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub view: ChartView,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub series: Vec<ChartSeries>,
}

impl Chart {
    /// Create a chart laid out for `view`
    pub fn new(view: ChartView, series: Vec<ChartSeries>) -> Self {
        let (width, height) = view.dimensions();
        Self {
            view,
            title: view.title().to_string(),
            width,
            height,
            series,
        }
    }

    /// Look up a series by name
    pub fn series(&self, name: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Destination for rendered charts
pub trait ChartSink: Send + 'static {
    fn render(&mut self, chart: &Chart) -> Result<()>;
}

/// Writes each chart as pretty-printed JSON
#[derive(Debug)]
pub struct JsonChartSink<W> {
    writer: W,
}

impl<W: Write + Send + 'static> JsonChartSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + 'static> ChartSink for JsonChartSink<W> {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, chart)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render `chart` on a new thread, returning the sink once it is done
pub fn spawn_render<S: ChartSink>(chart: Chart, mut sink: S) -> JoinHandle<Result<S>> {
    thread::spawn(move || {
        trace!(title = %chart.title, series = chart.series.len(), "rendering chart");
        sink.render(&chart)?;
        Ok(sink)
    })
}
