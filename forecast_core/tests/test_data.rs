use chrono::{TimeZone, Utc};
use forecast_core::data::{DataLoader, TimeScale, TimeSeries};
use forecast_core::ForecastError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn utc(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn test_data_loader_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,open,close").unwrap();
    writeln!(file, "2023-01-01,100.0,103.0").unwrap();
    writeln!(file, "2023-01-02,103.0,106.0").unwrap();
    writeln!(file, "2023-01-03,106.0,108.0").unwrap();

    let data = DataLoader::from_csv(file.path(), TimeScale::Day, 1).unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data.values(), &[103.0, 106.0, 108.0]);
    assert_eq!(data.start_time(), Some(utc(2023, 1, 1)));
    assert_eq!(data.time_scale(), TimeScale::Day);
}

#[test]
fn test_data_loader_rfc3339_timestamps() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "timestamp,value").unwrap();
    writeln!(file, "2023-01-01T09:00:00Z,1.5").unwrap();
    writeln!(file, "2023-01-01T10:00:00+00:00,2.5").unwrap();

    let data = DataLoader::from_csv(file.path(), TimeScale::Hour, 1).unwrap();

    assert_eq!(data.values(), &[1.5, 2.5]);
    assert_eq!(
        data.end_time(),
        Some(Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_data_loader_error_handling() {
    let result = DataLoader::from_csv("nonexistent_file.csv", TimeScale::Day, 1);
    assert!(matches!(result, Err(ForecastError::IoError(_))));

    let mut no_time = NamedTempFile::new().unwrap();
    writeln!(no_time, "label,value").unwrap();
    writeln!(no_time, "a,1.0").unwrap();
    assert!(matches!(
        DataLoader::from_csv(no_time.path(), TimeScale::Day, 1),
        Err(ForecastError::DataError(_))
    ));

    let mut bad_value = NamedTempFile::new().unwrap();
    writeln!(bad_value, "date,price").unwrap();
    writeln!(bad_value, "2023-01-01,abc").unwrap();
    assert!(matches!(
        DataLoader::from_csv(bad_value.path(), TimeScale::Day, 1),
        Err(ForecastError::DataError(_))
    ));

    let mut unordered = NamedTempFile::new().unwrap();
    writeln!(unordered, "date,price").unwrap();
    writeln!(unordered, "2023-01-02,1.0").unwrap();
    writeln!(unordered, "2023-01-01,2.0").unwrap();
    assert!(matches!(
        DataLoader::from_csv(unordered.path(), TimeScale::Day, 1),
        Err(ForecastError::DataError(_))
    ));
}

#[test]
fn test_time_series_operations() {
    let series = TimeSeries::new(TimeScale::Day, utc(2023, 1, 1), 1, vec![100.0, 103.0, 106.0]).unwrap();

    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.at(2).unwrap(), 106.0);
    assert!(matches!(
        series.at(3),
        Err(ForecastError::IndexOutOfRange { index: 3, len: 3 })
    ));

    let subset = series.slice(1, 3).unwrap();
    assert_eq!(subset.values(), &[103.0, 106.0]);
    assert_eq!(subset.start_time(), Some(utc(2023, 1, 2)));
    assert!(series.slice(2, 4).is_err());

    assert_eq!(series.mean().unwrap(), 103.0);
    assert_eq!(series.std_dev().unwrap(), 3.0);
}

#[test]
fn test_from_observations_validation() {
    let times = vec![utc(2023, 1, 1), utc(2023, 1, 2)];

    assert!(matches!(
        TimeSeries::from_observations(TimeScale::Day, 1, times.clone(), vec![1.0]),
        Err(ForecastError::DataError(_))
    ));
    assert!(matches!(
        TimeSeries::from_observations(TimeScale::Day, 1, vec![times[0], times[0]], vec![1.0, 2.0]),
        Err(ForecastError::DataError(_))
    ));
    assert!(matches!(
        TimeSeries::from_observations(TimeScale::Day, 0, times, vec![1.0, 2.0]),
        Err(ForecastError::InvalidArgument(_))
    ));
}

#[test]
fn test_json_round_trip_keeps_invariants() {
    let series = TimeSeries::new(TimeScale::Quarter, utc(2022, 1, 1), 1, vec![4.0, 5.0]).unwrap();

    let json = series.to_json().unwrap();
    let decoded: TimeSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, series);

    let broken = json.replace("[4.0,5.0]", "[4.0]");
    assert!(serde_json::from_str::<TimeSeries>(&broken).is_err());
}

#[test]
fn test_data_loader_uses_first_time_like_header() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "time,date,value").unwrap();
    writeln!(file, "2023-01-01T09:00:00Z,2020-05-05,1.0").unwrap();
    writeln!(file, "2023-01-01T10:00:00Z,2020-05-04,2.0").unwrap();

    let data = DataLoader::from_csv(file.path(), TimeScale::Hour, 1).unwrap();

    assert_eq!(
        data.start_time(),
        Some(Utc.with_ymd_and_hms(2023, 1, 1, 9, 0, 0).unwrap())
    );
}
