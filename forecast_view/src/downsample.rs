//! Stride sampling of the history series for trend charts

use crate::error::Result;
use crate::series::{year_month_label, Series};
use serde::Serialize;
use series_math::sampling::stride_indices;

/// Default distance between retained points
pub const DEFAULT_STRIDE: usize = 30;

/// One retained point of a downsampled trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Date truncated to `YYYY-MM`
    pub label: String,
    pub value: f64,
}

/// Keep observations at positions `0, stride, 2 * stride, ...`
pub fn sample_stride(history: &Series, stride: usize) -> Result<Vec<TrendPoint>> {
    let observations = history.observations();

    Ok(stride_indices(observations.len(), stride)?
        .map(|i| TrendPoint {
            label: year_month_label(observations[i].date),
            value: observations[i].value,
        })
        .collect())
}
