mod common;

use common::date;
use forecast_view::series::format_date;
use forecast_view::{
    aggregate_by_month, align_non_empty, query, sample_stride, table_rows, DashboardSummary,
    ForecastPayload, SeriesStore, SyntheticSeries, TableQuery, ViewConfig,
};
use pretty_assertions::assert_eq;

/// Payload shaped like the forecasting service response: ten years of daily
/// history followed by a two year daily forecast.
fn service_payload() -> ForecastPayload {
    let history = SyntheticSeries::new(date(1950, 1, 1), 3652)
        .seed(11)
        .generate()
        .unwrap();
    let forecast = SyntheticSeries::new(date(1960, 1, 1), 730)
        .base(220.0)
        .noise(0.0)
        .generate()
        .unwrap();

    ForecastPayload {
        history_dates: history.dates().map(format_date).collect(),
        history_values: history.values().collect(),
        forecast_dates: forecast.dates().map(format_date).collect(),
        forecast_values: forecast.values().collect(),
    }
}

#[test]
fn test_full_view_workflow() {
    let config = ViewConfig::default();
    let mut store = SeriesStore::new();
    store.load(service_payload()).unwrap();

    let history = store.history();
    let forecast = store.forecast();
    assert_eq!(history.last().unwrap().date, date(1959, 12, 31));

    // Chart
    let chart = align_non_empty(history, forecast).unwrap();
    assert_eq!(chart.len(), history.len() + forecast.len());
    assert_eq!(chart.join_index(), Some(history.len() - 1));

    // Seasonality
    let months = aggregate_by_month(history);
    assert_eq!(months.len(), 12);
    assert_eq!(
        months.iter().map(|b| b.count()).sum::<usize>(),
        history.len()
    );
    let july = months.iter().find(|b| b.month_index() == 6).unwrap();
    let november = months.iter().find(|b| b.month_index() == 10).unwrap();
    assert!(july.avg() > november.avg());

    // Trend
    let trend = sample_stride(history, config.trend_stride).unwrap();
    assert_eq!(trend.len(), history.len().div_ceil(config.trend_stride));
    assert_eq!(trend[0].label, "1950-01");

    // Table
    let rows = table_rows(history);
    let q = TableQuery::new(config.page_size).unwrap().with_filter("1955");
    let page = query(&rows, &q).unwrap();
    assert!(page.total_matched >= 365);
    assert_eq!(page.total_pages, page.total_matched.div_ceil(20).max(1));
    assert_eq!(page.rows.len(), 20);

    // Summary
    let summary = DashboardSummary::from_store(&store, &config).unwrap();
    assert_eq!(summary.total_points, 3652);
    assert_eq!(summary.forecast_horizon, 730);
    assert_eq!(
        summary.forecast_preview.unwrap().date,
        date(1960, 12, 31)
    );
}

#[test]
fn test_reload_recomputes_views() {
    let mut store = SeriesStore::new();
    store.load(service_payload()).unwrap();
    let rows_before = table_rows(store.history());

    let smaller = ForecastPayload {
        history_dates: vec!["2001-01-01".into(), "2001-02-01".into()],
        history_values: vec![10.0, 20.0],
        forecast_dates: vec!["2001-03-01".into()],
        forecast_values: vec![30.0],
    };
    store.load(smaller).unwrap();

    // Views handed out earlier are independent copies
    assert_eq!(rows_before.len(), 3652);
    assert_eq!(table_rows(store.history()).len(), 2);
    assert_eq!(store.revision(), 2);
}
