//! Holder of the loaded history and forecast series
//!
//! The store is the only input boundary of the view layer. Every derived view
//! is computed from a borrowed store and returns owned data, so replacing the
//! series after a new fetch can never leave a view pointing at stale input.

use crate::error::Result;
use crate::payload::{ForecastPayload, ModelMetrics};
use crate::series::{ensure_continuation, Series};
use log::{debug, warn};

/// In-memory history and forecast series plus optional model metrics
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    history: Series,
    forecast: Series,
    metrics: Option<ModelMetrics>,
    revision: u64,
}

impl SeriesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already validated series
    pub fn with_series(history: Series, forecast: Series) -> Result<Self> {
        let mut store = Self::new();
        store.replace(history, forecast)?;
        Ok(store)
    }

    /// Replace both series from a decoded forecast payload.
    ///
    /// The payload is fully validated first; on error the previously loaded
    /// series and revision are left as they were.
    pub fn load(&mut self, payload: ForecastPayload) -> Result<()> {
        match payload.into_series() {
            Ok((history, forecast)) => {
                self.install(history, forecast);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "Rejected forecast payload, keeping revision {}: {}",
                    self.revision, err
                );
                Err(err)
            }
        }
    }

    /// Replace both series, checking that the forecast continues the history
    pub fn replace(&mut self, history: Series, forecast: Series) -> Result<()> {
        ensure_continuation(&history, &forecast)?;
        self.install(history, forecast);
        Ok(())
    }

    fn install(&mut self, history: Series, forecast: Series) {
        self.history = history;
        self.forecast = forecast;
        self.revision += 1;
        debug!(
            "Loaded revision {}: {} history points, {} forecast points",
            self.revision,
            self.history.len(),
            self.forecast.len()
        );
    }

    pub fn set_metrics(&mut self, metrics: ModelMetrics) {
        self.metrics = Some(metrics);
    }

    pub fn history(&self) -> &Series {
        &self.history
    }

    pub fn forecast(&self) -> &Series {
        &self.forecast
    }

    pub fn metrics(&self) -> Option<&ModelMetrics> {
        self.metrics.as_ref()
    }

    /// Number of successful replacements; usable as a memoization key
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_loaded(&self) -> bool {
        self.revision > 0
    }
}
