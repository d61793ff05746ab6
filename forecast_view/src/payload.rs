//! Wire models of the forecasting service responses

use crate::error::Result;
use crate::series::{ensure_continuation, Series};
use serde::{Deserialize, Serialize};

/// Raw forecast result: two pairs of parallel date/value arrays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub history_dates: Vec<String>,
    pub history_values: Vec<f64>,
    pub forecast_dates: Vec<String>,
    pub forecast_values: Vec<f64>,
}

impl ForecastPayload {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse and validate both series.
    ///
    /// Either both series come back valid or nothing does; a payload with a
    /// bad date or mismatched arrays never yields a partial result.
    pub fn into_series(self) -> Result<(Series, Series)> {
        let history = Series::from_raw("history", &self.history_dates, &self.history_values)?;
        let forecast = Series::from_raw("forecast", &self.forecast_dates, &self.forecast_values)?;
        ensure_continuation(&history, &forecast)?;

        Ok((history, forecast))
    }
}

/// Model evaluation metrics, shown on the model page only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// ARIMA order `(p, d, q)`
    pub best_order: [u32; 3],
    pub rmse: f64,
    pub test_data_size: usize,
}

impl ModelMetrics {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
