//! Time series data handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Sampling granularity of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeScale {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeScale {
    /// Move `start` forward by `units` of this scale.
    ///
    /// Month-based scales use calendar arithmetic, so adding one month to
    /// January 31st lands on the last day of February.
    pub fn advance(&self, start: DateTime<Utc>, units: u64) -> Result<DateTime<Utc>> {
        let overflow = || {
            ForecastError::DataError(format!(
                "Advancing {} by {} {:?} units overflows",
                start, units, self
            ))
        };

        let units_i64 = i64::try_from(units).map_err(|_| overflow())?;

        let shifted = match self {
            TimeScale::Millisecond => chrono::Duration::try_milliseconds(units_i64)
                .and_then(|d| start.checked_add_signed(d)),
            TimeScale::Second => chrono::Duration::try_seconds(units_i64)
                .and_then(|d| start.checked_add_signed(d)),
            TimeScale::Minute => chrono::Duration::try_minutes(units_i64)
                .and_then(|d| start.checked_add_signed(d)),
            TimeScale::Hour => chrono::Duration::try_hours(units_i64)
                .and_then(|d| start.checked_add_signed(d)),
            TimeScale::Day => chrono::Duration::try_days(units_i64)
                .and_then(|d| start.checked_add_signed(d)),
            TimeScale::Week => chrono::Duration::try_weeks(units_i64)
                .and_then(|d| start.checked_add_signed(d)),
            TimeScale::Month => Self::add_months(start, units, 1),
            TimeScale::Quarter => Self::add_months(start, units, 3),
            TimeScale::Year => Self::add_months(start, units, 12),
        };

        shifted.ok_or_else(overflow)
    }

    fn add_months(start: DateTime<Utc>, units: u64, months_per_unit: u64) -> Option<DateTime<Utc>> {
        let months = units.checked_mul(months_per_unit)?;
        let months = u32::try_from(months).ok()?;
        start.checked_add_months(Months::new(months))
    }
}

/// Ordered, time-indexed sequence of observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TimeSeriesRecord")]
pub struct TimeSeries {
    /// Sampling granularity
    time_scale: TimeScale,
    /// Number of base time units per period
    period_length: u32,
    /// Observation timestamps, strictly increasing
    observation_times: Vec<DateTime<Utc>>,
    /// Observed values, one per timestamp
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct TimeSeriesRecord {
    time_scale: TimeScale,
    period_length: u32,
    observation_times: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TryFrom<TimeSeriesRecord> for TimeSeries {
    type Error = ForecastError;

    fn try_from(record: TimeSeriesRecord) -> Result<Self> {
        TimeSeries::from_observations(
            record.time_scale,
            record.period_length,
            record.observation_times,
            record.values,
        )
    }
}

impl TimeSeries {
    /// Create a series whose observation `i` is `start` advanced by
    /// `i * period_length` units of `time_scale`
    pub fn new(
        time_scale: TimeScale,
        start: DateTime<Utc>,
        period_length: u32,
        values: Vec<f64>,
    ) -> Result<Self> {
        validate_period_length(period_length)?;

        let observation_times = (0..values.len() as u64)
            .map(|i| time_scale.advance(start, i * u64::from(period_length)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            time_scale,
            period_length,
            observation_times,
            values,
        })
    }

    /// Create a series from explicit timestamps
    pub fn from_observations(
        time_scale: TimeScale,
        period_length: u32,
        observation_times: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self> {
        validate_period_length(period_length)?;

        if observation_times.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "Timestamps length ({}) doesn't match values length ({})",
                observation_times.len(),
                values.len()
            )));
        }

        if let Some(pos) = observation_times.windows(2).position(|w| w[0] >= w[1]) {
            return Err(ForecastError::DataError(format!(
                "Observation times must be strictly increasing (violated at index {})",
                pos + 1
            )));
        }

        Ok(Self {
            time_scale,
            period_length,
            observation_times,
            values,
        })
    }

    /// Get the value at `index`
    pub fn at(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .copied()
            .ok_or(ForecastError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Get the observed values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the observation timestamps
    pub fn observation_times(&self) -> &[DateTime<Utc>] {
        &self.observation_times
    }

    /// First observation time, if any
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.observation_times.first().copied()
    }

    /// Last observation time, if any
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.observation_times.last().copied()
    }

    /// Get the sampling granularity
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    /// Get the number of base time units per period
    pub fn period_length(&self) -> u32 {
        self.period_length
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Timestamp one period after the last observation
    pub fn next_period_start(&self) -> Result<DateTime<Utc>> {
        let last = self
            .end_time()
            .ok_or_else(|| ForecastError::DataError("Empty time series".to_string()))?;

        self.time_scale
            .advance(last, u64::from(self.period_length))
    }

    /// Mean of the values
    pub fn mean(&self) -> Result<f64> {
        Ok(forecast_math::mean(&self.values)?)
    }

    /// Sample standard deviation of the values
    pub fn std_dev(&self) -> Result<f64> {
        Ok(forecast_math::std_dev(&self.values)?)
    }

    /// Sub-series over `[start, end)` with the same scale and period
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(ForecastError::InvalidArgument(format!(
                "Slice start ({}) is after end ({})",
                start, end
            )));
        }

        if end > self.len() {
            return Err(ForecastError::IndexOutOfRange {
                index: end,
                len: self.len(),
            });
        }

        Ok(Self {
            time_scale: self.time_scale,
            period_length: self.period_length,
            observation_times: self.observation_times[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
        })
    }

    /// Serialize the series to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn validate_period_length(period_length: u32) -> Result<()> {
    if period_length == 0 {
        return Err(ForecastError::InvalidArgument(
            "Period length must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Data loader for time series data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a series from a CSV file with a header row
    pub fn from_csv<P: AsRef<Path>>(
        path: P,
        time_scale: TimeScale,
        period_length: u32,
    ) -> Result<TimeSeries> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader.headers()?.clone();
        let time_idx = Self::detect_column(&headers, &["date", "time", "timestamp"])
            .ok_or_else(|| ForecastError::DataError("No time column found in data".to_string()))?;
        let value_idx = Self::detect_column(&headers, &["value", "close", "price"])
            .ok_or_else(|| ForecastError::DataError("No value column found in data".to_string()))?;

        let mut times = Vec::new();
        let mut values = Vec::new();

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let raw_time = record.get(time_idx).unwrap_or_default();
            let raw_value = record.get(value_idx).unwrap_or_default();

            times.push(parse_timestamp(raw_time).ok_or_else(|| {
                ForecastError::DataError(format!("Row {}: cannot parse timestamp '{}'", row + 1, raw_time))
            })?);
            values.push(raw_value.trim().parse::<f64>().map_err(|e| {
                ForecastError::DataError(format!("Row {}: cannot parse value '{}': {}", row + 1, raw_value, e))
            })?);
        }

        TimeSeries::from_observations(time_scale, period_length, times, values)
    }

    /// Index of the first header containing any of `needles`
    fn detect_column(headers: &csv::StringRecord, needles: &[&str]) -> Option<usize> {
        headers.iter().position(|name| {
            let lower = name.to_lowercase();
            needles.iter().any(|needle| lower.contains(needle))
        })
    }
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
