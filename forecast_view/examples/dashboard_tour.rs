use chrono::NaiveDate;
use forecast_view::series::format_date;
use forecast_view::{
    aggregate_by_month, align, group_by_year, query, sample_stride, table_rows, DashboardSummary,
    ForecastPayload, ModelMetrics, ModelSummary, SeriesStore, SyntheticSeries, TableQuery,
    ViewConfig,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("Forecast View Dashboard Tour");
    println!("============================");

    // Stand-in for the forecasting service response
    let start = NaiveDate::from_ymd_opt(1950, 1, 1).ok_or("bad start date")?;
    let history = SyntheticSeries::new(start, 365 * 10).seed(2024).generate()?;
    let forecast_start = history
        .last()
        .and_then(|o| o.date.succ_opt())
        .ok_or("history is empty")?;
    let forecast = SyntheticSeries::new(forecast_start, 730)
        .base(215.0)
        .noise(0.0)
        .generate()?;

    let payload = ForecastPayload {
        history_dates: history.dates().map(format_date).collect(),
        history_values: history.values().collect(),
        forecast_dates: forecast.dates().map(format_date).collect(),
        forecast_values: forecast.values().collect(),
    };

    let config = ViewConfig::default();
    let mut store = SeriesStore::new();
    store.load(payload)?;
    store.set_metrics(ModelMetrics::from_json_str(
        r#"{"best_order": [5, 1, 0], "rmse": 14.83, "test_data_size": 365}"#,
    )?);

    println!("\n{}", DashboardSummary::from_store(&store, &config)?);
    if let Some(metrics) = store.metrics() {
        println!("{}", ModelSummary::from_metrics(metrics));
    }

    let chart = align(store.history(), store.forecast());
    println!(
        "Chart: {} points, join at index {:?}",
        chart.len(),
        chart.join_index()
    );

    println!("\nSeasonality:");
    for bucket in aggregate_by_month(store.history()) {
        println!(
            "  {:<10} avg {:>5}  min {:>5}  max {:>5}",
            bucket.label(config.month_labels),
            bucket.display_avg(),
            bucket.min(),
            bucket.max()
        );
    }

    println!("\nYearly averages:");
    for year in group_by_year(store.history()) {
        println!("  {}  {:.1}", year.year(), year.avg());
    }

    let trend = sample_stride(store.history(), config.trend_stride)?;
    println!("\nTrend: {} sampled points", trend.len());
    for point in trend.iter().take(6) {
        println!("  {}  {}", point.label, point.value);
    }

    let rows = table_rows(store.history());
    let mut q = TableQuery::new(config.page_size)?.with_filter("1955");
    let first = query(&rows, &q)?;
    q.next_page(&first);
    let second = query(&rows, &q)?;
    println!(
        "\nSearch \"1955\": {} records, page {} of {}",
        second.total_matched, second.page_index, second.total_pages
    );
    for row in second.rows.iter().take(5) {
        println!("  {}  {}  {}", row.formatted_date(), row.year, row.formatted_value());
    }

    Ok(())
}
