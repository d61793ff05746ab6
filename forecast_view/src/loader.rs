//! File loading of history series and service payloads

use crate::error::{Result, ViewError};
use crate::payload::{ForecastPayload, ModelMetrics};
use crate::series::Series;
use csv::StringRecord;
use log::debug;
use std::fs::{self, File};
use std::path::Path;

/// Loader for history files and saved payloads
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a history series from a CSV file such as `Date,Passengers`
    pub fn history_from_csv<P: AsRef<Path>>(path: P) -> Result<Series> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_reader(File::open(path)?);
        let headers = reader.headers()?.clone();

        let date_idx = Self::detect_date_column(&headers)?;
        let value_idx = Self::detect_value_column(&headers, date_idx)?;

        let mut dates = Vec::new();
        let mut values = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let raw_value = record.get(value_idx).unwrap_or_default().trim();
            let value = raw_value.parse::<f64>().map_err(|_| {
                ViewError::Csv(format!(
                    "Row {}: value {:?} is not a number",
                    row + 1,
                    raw_value
                ))
            })?;
            dates.push(record.get(date_idx).unwrap_or_default().to_string());
            values.push(value);
        }

        debug!("Read {} rows from {}", values.len(), path.display());
        Series::from_raw("history", &dates, &values)
    }

    /// Load a saved forecast result payload
    pub fn payload_from_json<P: AsRef<Path>>(path: P) -> Result<ForecastPayload> {
        ForecastPayload::from_json_str(&fs::read_to_string(path)?)
    }

    /// Load saved model metrics
    pub fn metrics_from_json<P: AsRef<Path>>(path: P) -> Result<ModelMetrics> {
        ModelMetrics::from_json_str(&fs::read_to_string(path)?)
    }

    /// Find the date column by header name
    fn detect_date_column(headers: &StringRecord) -> Result<usize> {
        headers
            .iter()
            .position(|name| {
                let lower = name.to_lowercase();
                lower.contains("date") || lower.contains("time") || lower.contains("month")
            })
            .ok_or_else(|| ViewError::Csv("No date column found in header".to_string()))
    }

    /// Prefer a value-like header name, otherwise the first non-date column
    fn detect_value_column(headers: &StringRecord, date_idx: usize) -> Result<usize> {
        let named = headers.iter().position(|name| {
            let lower = name.to_lowercase();
            lower.contains("passengers") || lower.contains("value")
        });

        named
            .or_else(|| (0..headers.len()).find(|&i| i != date_idx))
            .ok_or_else(|| ViewError::Csv("No value column found in header".to_string()))
    }
}
