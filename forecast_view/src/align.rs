//! Chart alignment of history and forecast
//!
//! Both series are laid out on one shared date axis. The forecast track
//! repeats the last history value at the boundary index so the two lines meet
//! when drawn. The join is positional; no date arithmetic is involved, and a
//! calendar gap between the two series is legal.

use crate::error::{Result, ViewError};
use crate::series::Series;
use chrono::NaiveDate;
use serde::Serialize;

/// Two nullable tracks over one date axis
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlignedChartSeries {
    pub dates: Vec<NaiveDate>,
    pub history_track: Vec<Option<f64>>,
    pub forecast_track: Vec<Option<f64>>,
}

impl AlignedChartSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Index holding the shared point, if both series were non-empty
    pub fn join_index(&self) -> Option<usize> {
        self.history_track
            .iter()
            .rposition(Option::is_some)
            .filter(|&i| self.forecast_track.get(i).copied().flatten().is_some())
    }
}

/// Align history and forecast on one axis.
///
/// Never fails; empty inputs produce empty (or one-sided) tracks.
pub fn align(history: &Series, forecast: &Series) -> AlignedChartSeries {
    let h = history.len();
    let f = forecast.len();

    let dates: Vec<NaiveDate> = history.dates().chain(forecast.dates()).collect();

    let history_track: Vec<Option<f64>> = history
        .values()
        .map(Some)
        .chain(std::iter::repeat(None).take(f))
        .collect();

    let mut forecast_track: Vec<Option<f64>> = std::iter::repeat(None)
        .take(h)
        .chain(forecast.values().map(Some))
        .collect();

    if let (Some(last), false) = (history.last(), forecast.is_empty()) {
        forecast_track[h - 1] = Some(last.value);
    }

    AlignedChartSeries {
        dates,
        history_track,
        forecast_track,
    }
}

/// Like [`align`], but both series must contain data
pub fn align_non_empty(history: &Series, forecast: &Series) -> Result<AlignedChartSeries> {
    if history.is_empty() {
        return Err(ViewError::EmptySeries(
            "Cannot align an empty history series".to_string(),
        ));
    }
    if forecast.is_empty() {
        return Err(ViewError::EmptySeries(
            "Cannot align an empty forecast series".to_string(),
        ));
    }

    Ok(align(history, forecast))
}
