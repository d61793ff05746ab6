//! Running statistics for value buckets
//!
//! `RunningStats` accumulates count, sum, min and max in a single pass so a
//! bucket never has to be rescanned to answer summary queries.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Single-pass accumulator for count, sum, min and max
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningStats {
    count: usize,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl RunningStats {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an accumulator from an iterator of values
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut stats = Self::new();
        for value in values {
            stats.update(value);
        }
        stats
    }

    /// Add a value
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Exact arithmetic mean of the values seen so far
    pub fn mean(&self) -> Result<f64> {
        if self.count == 0 {
            return Err(MathError::InsufficientData(
                "Mean requires at least one value".to_string(),
            ));
        }

        Ok(self.sum / self.count as f64)
    }

    /// Smallest value seen so far
    pub fn min(&self) -> Result<f64> {
        self.min.ok_or_else(|| {
            MathError::InsufficientData("Minimum requires at least one value".to_string())
        })
    }

    /// Largest value seen so far
    pub fn max(&self) -> Result<f64> {
        self.max.ok_or_else(|| {
            MathError::InsufficientData("Maximum requires at least one value".to_string())
        })
    }

    /// Reset the accumulator, clearing all values
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Round to the nearest integer for display, halves going toward +infinity.
///
/// This is the rounding dashboards conventionally show (`2.5 -> 3`,
/// `-2.5 -> -2`), which differs from `f64::round` on negative halves.
pub fn display_round(value: f64) -> i64 {
    // `value + 0.5` can round up on its own, e.g. for 0.49999999999999994
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}
