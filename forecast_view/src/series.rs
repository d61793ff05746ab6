//! Dated observations and validated series
//!
//! A `Series` is strictly increasing by date with no duplicates. Dates are
//! parsed once, when the series is built, so every downstream view works on
//! `NaiveDate` values and can never meet a malformed date.

use crate::error::{Result, ViewError};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Single dated value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Calendar month index, 0 for January through 11 for December
    pub fn month_index(&self) -> usize {
        self.date.month0() as usize
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Ordered sequence of observations, strictly increasing by date
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// Create a series, checking that dates strictly increase
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if let Some(pos) = observations
            .windows(2)
            .position(|pair| pair[1].date <= pair[0].date)
        {
            return Err(ViewError::Data(format!(
                "Dates must be strictly increasing: {} at position {} follows {}",
                format_date(observations[pos + 1].date),
                pos + 1,
                format_date(observations[pos].date),
            )));
        }

        Ok(Self { observations })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from the parallel date/value arrays of a payload.
    ///
    /// `name` ("history", "forecast") is carried into any error so a caller
    /// can tell which series was rejected.
    pub fn from_raw<S: AsRef<str>>(name: &str, dates: &[S], values: &[f64]) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ViewError::Data(format!(
                "{} series: date and value arrays differ in length: {} dates, {} values",
                name,
                dates.len(),
                values.len()
            )));
        }

        let observations = dates
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (raw, &value))| {
                let raw = raw.as_ref();
                parse_date(raw)
                    .map(|date| Observation::new(date, value))
                    .ok_or_else(|| ViewError::InvalidDate {
                        series: name.to_string(),
                        index,
                        value: raw.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(observations).map_err(|e| match e {
            ViewError::Data(msg) => ViewError::Data(format!("{} series: {}", name, msg)),
            other => other,
        })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.observations.iter().map(|o| o.date)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().map(|o| o.value)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// Check that `forecast` starts strictly after `history` ends
pub fn ensure_continuation(history: &Series, forecast: &Series) -> Result<()> {
    if let (Some(last), Some(first)) = (history.last(), forecast.first()) {
        if first.date <= last.date {
            return Err(ViewError::Data(format!(
                "Forecast starts at {} but history runs until {}",
                format_date(first.date),
                format_date(last.date)
            )));
        }
    }
    Ok(())
}

/// Parse an ISO-8601 date, accepting a trailing time component
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .ok()
}

/// `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM`, the label granularity of trend charts
pub fn year_month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Plain number text as the dashboard prints it: `120`, `120.5`, `-3`.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent form
/// with a signed exponent (`1e+21`, `1.5e-7`).
pub fn format_value(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 prints as "-0"
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("1955-03-01"), Some(date(1955, 3, 1)));
        assert_eq!(parse_date("1955-03-01T12:30:00"), Some(date(1955, 3, 1)));
        assert_eq!(parse_date("1955-03-01T12:30:00Z"), Some(date(1955, 3, 1)));
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("1955-13-01"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(120.0), "120");
        assert_eq!(format_value(120.5), "120.5");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_format_value_exponent_ranges() {
        assert_eq!(format_value(1e21), "1e+21");
        assert_eq!(format_value(-2.5e22), "-2.5e+22");
        assert_eq!(format_value(1.5e-7), "1.5e-7");
        assert_eq!(format_value(999999999999999900000.0), "999999999999999900000");
        assert_eq!(format_value(0.000001), "0.000001");
    }

    #[test]
    fn test_unordered_series_is_rejected() {
        let result = Series::new(vec![
            Observation::new(date(2020, 2, 1), 1.0),
            Observation::new(date(2020, 1, 1), 2.0),
        ]);
        assert!(matches!(result, Err(ViewError::Data(_))));
    }

    #[test]
    fn test_duplicate_dates_are_rejected() {
        let result = Series::from_raw("history", &["2020-01-01", "2020-01-01"], &[1.0, 2.0]);
        match result {
            Err(ViewError::Data(msg)) => assert!(msg.starts_with("history series:")),
            other => panic!("Expected Data error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date_names_the_observation() {
        let result = Series::from_raw("forecast", &["2020-01-01", "2020-02-30"], &[1.0, 2.0]);
        match result {
            Err(ViewError::InvalidDate {
                series,
                index,
                value,
            }) => {
                assert_eq!(series, "forecast");
                assert_eq!(index, 1);
                assert_eq!(value, "2020-02-30");
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }
}
