//! # Forecast View
//!
//! Reshaping and aggregation of a precomputed time series forecast into the
//! structures a dashboard renders.
//!
//! ## Features
//!
//! - Validated history/forecast series loaded from the forecasting service payload
//! - Chart alignment with a shared join point between history and forecast
//! - Calendar aggregation (month-of-year, year-month, yearly)
//! - Stride-sampled trend series
//! - Filtered, paginated table view
//! - Dashboard and model summaries
//!
//! Every view is a pure function of the [`SeriesStore`] contents (and, for the
//! table, a [`TableQuery`]). Views return owned data, so reloading the store
//! never invalidates a view already handed to a renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_view::{align, aggregate_by_month, sample_stride, query, table_rows};
//! use forecast_view::{ForecastPayload, SeriesStore, TableQuery};
//!
//! let payload = ForecastPayload::from_json_str(r#"{
//!     "history_dates": ["1950-01-01", "1950-02-01", "1951-01-01"],
//!     "history_values": [100, 120, 110],
//!     "forecast_dates": ["1951-02-01"],
//!     "forecast_values": [125.5]
//! }"#)?;
//!
//! let mut store = SeriesStore::new();
//! store.load(payload)?;
//!
//! let chart = align(store.history(), store.forecast());
//! assert_eq!(chart.forecast_track[2], Some(110.0));
//!
//! let months = aggregate_by_month(store.history());
//! assert_eq!(months[0].display_avg(), 105);
//!
//! let trend = sample_stride(store.history(), 2)?;
//! assert_eq!(trend.len(), 2);
//!
//! let rows = table_rows(store.history());
//! let page = query(&rows, &TableQuery::default().with_filter("1951"))?;
//! assert_eq!(page.total_matched, 1);
//! # Ok::<(), forecast_view::ViewError>(())
//! ```

pub mod align;
pub mod calendar;
pub mod config;
pub mod downsample;
pub mod error;
pub mod loader;
pub mod payload;
pub mod series;
pub mod store;
pub mod summary;
pub mod synthetic;
pub mod table;

// Re-export commonly used types
pub use crate::align::{align, align_non_empty, AlignedChartSeries};
pub use crate::calendar::{
    aggregate_by_month, aggregate_by_year_month, group_by_year, MonthBucket, MonthLabelStyle,
    YearGroup, YearMonthBucket,
};
pub use crate::config::ViewConfig;
pub use crate::downsample::{sample_stride, TrendPoint, DEFAULT_STRIDE};
pub use crate::error::{Result, ViewError};
pub use crate::loader::DataLoader;
pub use crate::payload::{ForecastPayload, ModelMetrics};
pub use crate::series::{Observation, Series};
pub use crate::store::SeriesStore;
pub use crate::summary::{DashboardSummary, ModelSummary};
pub use crate::synthetic::SyntheticSeries;
pub use crate::table::{query, table_rows, TablePage, TableQuery, TableRow};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
