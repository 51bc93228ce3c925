use prettytable::{Table, row};
use std::sync::Arc;
use tracing::{error, info};
use twelvedata_etl::application::config::Config;
use twelvedata_etl::application::pipeline::{Pipeline, StageReport};
use twelvedata_etl::transport::http_client::TwelveDataClient;
use twelvedata_etl::utils::logger::setup_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Arc::new(Config::new());

    info!("=== TwelveData ETL ===");
    info!("Configuration loaded:");
    info!("  Base URL: {}", config.rest_api.base_url);
    info!("  Tickers: {}", config.tickers.join(", "));
    info!("  Indicators: {}", config.indicators.join(", "));
    info!("  Interval: {}", config.interval);
    info!("  Conflict policy: {}", config.conflict_policy);

    // Validate configuration
    if config.credentials.api_key.is_empty() || config.credentials.api_key == "default_api_key" {
        error!("API key is missing. Please set the TWELVEDATA_API_KEY environment variable.");
        return Err("Missing API key configuration".into());
    }

    if config.tickers.is_empty() {
        error!("Ticker list is empty. Please set ETL_TICKERS.");
        return Err("Empty ticker list".into());
    }

    // Create database pool
    let pool = match config.pg_pool().await {
        Ok(pool) => {
            info!("Database pool created");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // Create HTTP client and pipeline
    let client = Arc::new(TwelveDataClient::new(Arc::clone(&config)));
    let pipeline = Pipeline::new(Arc::clone(&config), client, pool);

    let report = pipeline.run().await;

    // Print run summary
    let mut table = Table::new();
    table.add_row(row![
        "Stage",
        "Requests",
        "Rows written",
        "Rows skipped",
        "Failures"
    ]);
    add_stage_row(&mut table, "bars", &report.bars);
    add_stage_row(&mut table, "indicators", &report.indicators);
    table.printstd();

    if report.has_failures() {
        error!(
            "Run finished with {} failed iteration(s)",
            report.bars.failures + report.indicators.failures
        );
        return Err("Pipeline run had failures".into());
    }

    info!("Run finished successfully");
    Ok(())
}

fn add_stage_row(table: &mut Table, name: &str, stage: &StageReport) {
    table.add_row(row![
        name,
        stage.requests,
        stage.rows_written,
        stage.rows_skipped,
        stage.failures
    ]);
}
