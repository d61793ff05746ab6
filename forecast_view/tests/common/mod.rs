#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use forecast_view::{Observation, Series};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a series from `(iso date, value)` pairs
pub fn series(points: &[(&str, f64)]) -> Series {
    let dates: Vec<&str> = points.iter().map(|(d, _)| *d).collect();
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    Series::from_raw("history", &dates, &values).unwrap()
}

/// Daily series of `values` starting at `start`
pub fn daily(start: NaiveDate, values: &[f64]) -> Series {
    let observations = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Observation::new(start.checked_add_days(Days::new(i as u64)).unwrap(), v))
        .collect();
    Series::new(observations).unwrap()
}
