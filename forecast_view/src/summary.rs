//! Headline figures for the dashboard and model pages

use crate::config::ViewConfig;
use crate::error::{Result, ViewError};
use crate::payload::ModelMetrics;
use crate::series::{format_date, Observation};
use crate::store::SeriesStore;
use serde::Serialize;
use series_math::{display_round, RunningStats};
use std::fmt;

/// Summary widgets computed from the loaded series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_points: usize,
    /// Exact mean of the history values
    pub average: f64,
    pub last_history: Observation,
    /// Forecast point at the configured preview offset, if the forecast reaches it
    pub forecast_preview: Option<Observation>,
    pub last_forecast: Option<Observation>,
    /// Number of forecast points
    pub forecast_horizon: usize,
}

impl DashboardSummary {
    pub fn from_store(store: &SeriesStore, config: &ViewConfig) -> Result<Self> {
        let history = store.history();
        let forecast = store.forecast();

        let last_history = *history.last().ok_or(ViewError::EmptyHistory)?;
        let average = RunningStats::from_values(history.values()).mean()?;

        Ok(Self {
            total_points: history.len(),
            average,
            last_history,
            forecast_preview: forecast.get(config.preview_offset).copied(),
            last_forecast: forecast.last().copied(),
            forecast_horizon: forecast.len(),
        })
    }

    /// Average rounded the way the dashboard prints it
    pub fn display_average(&self) -> i64 {
        display_round(self.average)
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard Overview:")?;
        writeln!(f, "  Data points:   {}", self.total_points)?;
        writeln!(f, "  Horizon:       {} days", self.forecast_horizon)?;
        writeln!(f, "  Average:       {}", self.display_average())?;
        writeln!(
            f,
            "  Last history:  {} on {}",
            self.last_history.value,
            format_date(self.last_history.date)
        )?;
        match &self.forecast_preview {
            Some(p) => writeln!(f, "  Preview:       {:.0} on {}", p.value, format_date(p.date))?,
            None => writeln!(f, "  Preview:       N/A")?,
        }
        Ok(())
    }
}

/// Model page figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub order: [u32; 3],
    pub rmse: f64,
    pub test_data_size: usize,
}

impl ModelSummary {
    pub fn from_metrics(metrics: &ModelMetrics) -> Self {
        Self {
            order: metrics.best_order,
            rmse: metrics.rmse,
            test_data_size: metrics.test_data_size,
        }
    }

    /// Lagged observations used (p)
    pub fn autoregressive_lags(&self) -> u32 {
        self.order[0]
    }

    /// Times the data is differenced (d)
    pub fn differencing(&self) -> u32 {
        self.order[1]
    }

    /// Past forecast errors used (q)
    pub fn moving_average_terms(&self) -> u32 {
        self.order[2]
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Summary:")?;
        writeln!(
            f,
            "  Order:      ({}, {}, {})",
            self.order[0], self.order[1], self.order[2]
        )?;
        writeln!(f, "  RMSE:       {:.2}", self.rmse)?;
        writeln!(f, "  Test size:  {}", self.test_data_size)?;
        Ok(())
    }
}
