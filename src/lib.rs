//! # Passenger Dashboard
//!
//! `passenger_dashboard` bundles the forecast view layer with the state a
//! dashboard shell keeps between renders: the loaded series, the view
//! settings and the data explorer query.
//!
//! ## Example
//!
//! ```
//! use passenger_dashboard::Dashboard;
//! use passenger_dashboard::forecast_view::ForecastPayload;
//!
//! let mut dashboard = Dashboard::default();
//! dashboard.load(ForecastPayload {
//!     history_dates: vec!["1955-01-01".into(), "1955-02-01".into()],
//!     history_values: vec![242.0, 233.0],
//!     forecast_dates: vec!["1955-03-01".into()],
//!     forecast_values: vec![267.0],
//! })?;
//!
//! assert_eq!(dashboard.chart().len(), 3);
//! assert_eq!(dashboard.seasonality().len(), 2);
//! # Ok::<(), passenger_dashboard::forecast_view::ViewError>(())
//! ```

pub use forecast_view;
pub use series_math;

use forecast_view::{
    aggregate_by_month, align, query, sample_stride, table_rows, AlignedChartSeries,
    DashboardSummary, ForecastPayload, ModelSummary, MonthBucket, Result, SeriesStore, TablePage,
    TableQuery, TrendPoint, ViewConfig,
};

/// Shell-owned dashboard state.
///
/// The core views only read this state; the shell mutates it in response to
/// fetches and user input.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: SeriesStore,
    config: ViewConfig,
    table_query: TableQuery,
}

impl Dashboard {
    /// Creates a dashboard with validated settings and no data.
    pub fn new(config: ViewConfig) -> Result<Self> {
        config.validate()?;
        let table_query = TableQuery::new(config.page_size)?;

        Ok(Self {
            store: SeriesStore::new(),
            config,
            table_query,
        })
    }

    /// Replaces the loaded series; a rejected payload keeps the old data.
    pub fn load(&mut self, payload: ForecastPayload) -> Result<()> {
        self.store.load(payload)?;
        self.table_query.set_page_index(1);
        Ok(())
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SeriesStore {
        &mut self.store
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn table_query(&self) -> &TableQuery {
        &self.table_query
    }

    /// Sets the data explorer search text, returning to page 1 on change.
    pub fn search(&mut self, text: &str) {
        self.table_query.set_filter_text(text);
    }

    /// Returns the current data explorer page.
    pub fn table_page(&self) -> Result<TablePage> {
        query(&table_rows(self.store.history()), &self.table_query)
    }

    /// Advances the data explorer by one page, stopping at the last page.
    pub fn next_page(&mut self) -> Result<()> {
        let current = self.table_page()?;
        self.table_query.next_page(&current);
        Ok(())
    }

    /// Moves the data explorer back one page, stopping at page 1.
    pub fn previous_page(&mut self) -> Result<()> {
        let current = self.table_page()?;
        self.table_query.previous_page(&current);
        Ok(())
    }

    pub fn chart(&self) -> AlignedChartSeries {
        align(self.store.history(), self.store.forecast())
    }

    pub fn seasonality(&self) -> Vec<MonthBucket> {
        aggregate_by_month(self.store.history())
    }

    pub fn trend(&self) -> Result<Vec<TrendPoint>> {
        sample_stride(self.store.history(), self.config.trend_stride)
    }

    pub fn summary(&self) -> Result<DashboardSummary> {
        DashboardSummary::from_store(&self.store, &self.config)
    }

    /// Model page figures, if metrics were loaded.
    pub fn model(&self) -> Option<ModelSummary> {
        self.store.metrics().map(ModelSummary::from_metrics)
    }
}
