use forecast_core::{ForecastConfig, ForecastError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"steps": 30, "alpha": 0.1}}"#).unwrap();

    let config = ForecastConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config, ForecastConfig::new(30, 0.1).unwrap());
}

#[test]
fn test_config_from_json_file_rejects_invalid_alpha() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"alpha": 1.0}}"#).unwrap();

    assert!(matches!(
        ForecastConfig::from_json_file(file.path()),
        Err(ForecastError::InvalidArgument(_))
    ));
}

#[test]
fn test_config_from_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "steps = 3").unwrap();

    assert!(matches!(
        ForecastConfig::from_json_file(file.path()),
        Err(ForecastError::JsonError(_))
    ));
    assert!(matches!(
        ForecastConfig::from_json_file("/nonexistent/config.json"),
        Err(ForecastError::IoError(_))
    ));
}
