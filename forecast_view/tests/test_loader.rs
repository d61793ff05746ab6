mod common;

use common::date;
use forecast_view::{DataLoader, MonthLabelStyle, SeriesStore, ViewConfig, ViewError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_history_from_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Passengers").unwrap();
    writeln!(file, "1950-01-01,112").unwrap();
    writeln!(file, "1950-01-02,118").unwrap();
    writeln!(file, "1950-01-03,132").unwrap();

    let history = DataLoader::history_from_csv(file.path()).unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history.first().unwrap().date, date(1950, 1, 1));
    assert_eq!(history.values().collect::<Vec<_>>(), vec![112.0, 118.0, 132.0]);
}

#[test]
fn test_csv_value_column_detection() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id,value,date").unwrap();
    writeln!(file, "1,5.5,2020-01-01").unwrap();
    writeln!(file, "2,6.5,2020-02-01").unwrap();

    let history = DataLoader::history_from_csv(file.path()).unwrap();

    assert_eq!(history.values().collect::<Vec<_>>(), vec![5.5, 6.5]);
}

#[test]
fn test_csv_errors() {
    assert!(matches!(
        DataLoader::history_from_csv("nonexistent_file.csv"),
        Err(ViewError::Io(_))
    ));

    let mut no_date = NamedTempFile::new().unwrap();
    writeln!(no_date, "a,b").unwrap();
    writeln!(no_date, "1,2").unwrap();
    assert!(matches!(
        DataLoader::history_from_csv(no_date.path()),
        Err(ViewError::Csv(_))
    ));

    let mut bad_value = NamedTempFile::new().unwrap();
    writeln!(bad_value, "Date,Passengers").unwrap();
    writeln!(bad_value, "1950-01-01,lots").unwrap();
    assert!(matches!(
        DataLoader::history_from_csv(bad_value.path()),
        Err(ViewError::Csv(_))
    ));

    let mut bad_date = NamedTempFile::new().unwrap();
    writeln!(bad_date, "Date,Passengers").unwrap();
    writeln!(bad_date, "1950-01-01,1").unwrap();
    writeln!(bad_date, "January,2").unwrap();
    assert!(matches!(
        DataLoader::history_from_csv(bad_date.path()),
        Err(ViewError::InvalidDate { index: 1, ref series, .. }) if series == "history"
    ));
}

#[test]
fn test_payload_and_metrics_files() {
    let mut forecast = NamedTempFile::new().unwrap();
    write!(
        forecast,
        r#"{{"history_dates":["1950-01-01"],"history_values":[112],"forecast_dates":["1950-01-02"],"forecast_values":[113.5]}}"#
    )
    .unwrap();
    let mut metrics = NamedTempFile::new().unwrap();
    write!(metrics, r#"{{"best_order":[5,1,0],"rmse":12.5,"test_data_size":365}}"#).unwrap();

    let mut store = SeriesStore::new();
    store
        .load(DataLoader::payload_from_json(forecast.path()).unwrap())
        .unwrap();
    store.set_metrics(DataLoader::metrics_from_json(metrics.path()).unwrap());

    assert_eq!(store.forecast().len(), 1);
    assert_eq!(store.metrics().unwrap().rmse, 12.5);
}

#[test]
fn test_config_defaults() {
    let config = ViewConfig::default();

    assert_eq!(config.trend_stride, 30);
    assert_eq!(config.page_size, 20);
    assert_eq!(config.preview_offset, 365);
    assert_eq!(config.month_labels, MonthLabelStyle::Full);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"page_size": 50, "month_labels": "short"}}"#).unwrap();

    let config = ViewConfig::from_json_file(file.path()).unwrap();

    assert_eq!(config.page_size, 50);
    assert_eq!(config.month_labels, MonthLabelStyle::Short);
    assert_eq!(config.trend_stride, 30);
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(matches!(
        ViewConfig::from_json_str(r#"{"trend_stride": 0}"#),
        Err(ViewError::InvalidArgument(_))
    ));
    assert!(matches!(
        ViewConfig::from_json_str(r#"{"page_size": 0}"#),
        Err(ViewError::InvalidArgument(_))
    ));
}
