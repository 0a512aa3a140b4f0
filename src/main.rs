use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::runtime::Runtime;

use wind_history::history::TableView;
use wind_history::utils::time_utils::epoch_ms_to_utc;
use wind_history::{
    Cli, DatasetEngine, HistoryTable, LoadStatus, PublishedDataset, Series, WindSafety,
    compass_point, fetcher_for_source,
};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load the selected year (blocking)
    let fetcher = fetcher_for_source(&args.source)
        .with_context(|| format!("Failed to set up source {:?}", args.source))?;
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let dataset = rt.block_on(load_year(fetcher, &args))?;

    // D. Output
    if args.json {
        print_chart_json(&dataset)?;
    } else {
        print_summary(&dataset);
    }

    // E. Historical table (independent of the series)
    if let Some(path) = &args.records {
        let table = HistoryTable::load_json(path)?;
        print_table(&table.view(args.sort, args.page));
    }
    Ok(())
}

async fn load_year(
    fetcher: Arc<dyn wind_history::SourceFetcher>,
    args: &Cli,
) -> Result<Arc<PublishedDataset>> {
    let mut engine = DatasetEngine::new(fetcher);
    engine.select_year(args.year);

    let state = engine.wait_for_current().await;
    match (state.status, &state.published, &state.last_error) {
        (LoadStatus::Succeeded, Some(dataset), _) => Ok(Arc::clone(dataset)),
        (_, _, Some(message)) => bail!("{}", message),
        (status, _, _) => bail!("Load for {} ended in state {}", args.year, status),
    }
}

fn print_chart_json(dataset: &PublishedDataset) -> Result<()> {
    let payload = serde_json::json!({
        "year": dataset.year,
        "speed": dataset.speed.chart_payload(),
        "direction": dataset.direction.chart_payload(),
    });
    let text = serde_json::to_string_pretty(&payload).context("Failed to serialize chart data")?;
    println!("{}", text);
    Ok(())
}

fn print_summary(dataset: &PublishedDataset) {
    println!("Wind data for {}", dataset.year);
    print_series_line(&dataset.speed);
    print_series_line(&dataset.direction);

    if let Some(last) = dataset.direction.samples.last() {
        println!(
            "  Latest direction: {} (predicted {})",
            compass_point(last.actual).unwrap_or("-"),
            compass_point(last.predicted).unwrap_or("-")
        );
    }
}

fn print_series_line(series: &Series) {
    let d = series.descriptor();
    match series.time_span() {
        Some((first, last)) => println!(
            "  {:<35} {:>6} samples  {} -> {}",
            d.axis_label,
            series.len(),
            epoch_ms_to_utc(first),
            epoch_ms_to_utc(last)
        ),
        None => println!("  {:<35} no valid samples", d.axis_label),
    }
}

fn print_table(view: &TableView<'_>) {
    println!();
    println!("Historical records ({})", view.mode.label());
    println!(
        "{:<10} {:<5} {:>8} {:>8} {:<10} {:<10} {}",
        "Date", "Time", "Speed", "Pred", "Dir", "Pred dir", "Status"
    );
    for record in &view.rows {
        let status = WindSafety::classify(record.current_speed)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<5} {:>8.1} {:>8.1} {:<10} {:<10} {}",
            record.date.format("%Y-%m-%d"),
            record.time.format("%H:%M"),
            record.current_speed,
            record.predicted_speed,
            record.current_dir,
            record.predicted_dir,
            status
        );
    }
    println!(
        "{} (page {} of {})",
        view.range_label(),
        view.bounds.number,
        view.bounds.total_pages
    );
}
