//! Pipeline driver
//!
//! Sequences fetch, normalize and store over the configured instruments:
//! first the bar stage for every ticker, then one pause (the provider
//! accounts bars and indicators against separate quota windows), then the
//! indicator stage over the ticker x indicator cross product. Iterations are
//! sequential and independent; a failure in one is logged and counted, and
//! the remaining iterations proceed. Per-request pacing lives in the
//! client's rate limiter, not in the driver.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::requests::{DateWindow, EndpointDescriptor};
use crate::normalize::{normalize_bars, normalize_indicator};
use crate::storage::market_data::{StorageStats, store_bars, store_indicators};
use crate::transport::http_client::MarketDataClient;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Outcome counters for one pipeline stage
#[derive(Debug, Default)]
pub struct StageReport {
    /// Number of fetch attempts issued
    pub requests: usize,
    /// Rows written to the database
    pub rows_written: usize,
    /// Rows skipped by the conflict policy
    pub rows_skipped: usize,
    /// Iterations that failed and were skipped
    pub failures: usize,
}

/// Outcome of one full pipeline run
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Bar stage counters
    pub bars: StageReport,
    /// Indicator stage counters
    pub indicators: StageReport,
}

impl PipelineReport {
    /// True when at least one iteration failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.bars.failures > 0 || self.indicators.failures > 0
    }
}

/// Driver that runs the full extract-transform-load sweep
///
/// Generic over the client seam so tests can substitute a canned
/// [`MarketDataClient`] implementation.
pub struct Pipeline<T: MarketDataClient> {
    config: Arc<Config>,
    client: Arc<T>,
    pool: PgPool,
}

impl<T: MarketDataClient> Pipeline<T> {
    /// Creates a new pipeline driver
    pub fn new(config: Arc<Config>, client: Arc<T>, pool: PgPool) -> Self {
        Self {
            config,
            client,
            pool,
        }
    }

    /// Runs the bar stage, the inter-stage pause, then the indicator stage
    ///
    /// Never aborts on a single bad instrument or indicator: failures are
    /// logged, counted in the report and the sweep continues.
    pub async fn run(&self) -> PipelineReport {
        let mut report = PipelineReport::default();

        info!("Starting bar stage for {} tickers", self.config.tickers.len());
        self.run_bar_stage(&mut report.bars).await;

        info!(
            "Bar stage complete ({} rows). Pausing {} seconds before indicator stage",
            report.bars.rows_written, self.config.stage_pause_seconds
        );
        tokio::time::sleep(Duration::from_secs(self.config.stage_pause_seconds)).await;

        info!(
            "Starting indicator stage: {} tickers x {} indicators",
            self.config.tickers.len(),
            self.config.indicators.len()
        );
        self.run_indicator_stage(&mut report.indicators).await;

        report
    }

    async fn run_bar_stage(&self, report: &mut StageReport) {
        for ticker in &self.config.tickers {
            report.requests += 1;
            match self.load_bars(ticker).await {
                Ok(stats) => {
                    report.rows_written += stats.inserted;
                    report.rows_skipped += stats.skipped;
                }
                Err(e) => {
                    error!("Bar load failed for {}: {}", ticker, e);
                    report.failures += 1;
                }
            }
        }
    }

    async fn run_indicator_stage(&self, report: &mut StageReport) {
        for ticker in &self.config.tickers {
            for indicator in &self.config.indicators {
                report.requests += 1;
                match self.load_indicator(ticker, indicator).await {
                    Ok(stats) => {
                        report.rows_written += stats.inserted;
                        report.rows_skipped += stats.skipped;
                    }
                    Err(e) => {
                        error!("Indicator load failed for {}/{}: {}", ticker, indicator, e);
                        report.failures += 1;
                    }
                }
            }
        }
    }

    async fn load_bars(&self, ticker: &str) -> Result<StorageStats, AppError> {
        let endpoint = EndpointDescriptor::time_series(
            ticker,
            &self.config.interval,
            self.config.output_size,
            DateWindow::Today,
        )?;
        let payload = self.client.fetch(&endpoint).await?;
        let rows = normalize_bars(&payload)?;
        store_bars(&self.pool, &rows, self.config.conflict_policy).await
    }

    async fn load_indicator(&self, ticker: &str, indicator: &str) -> Result<StorageStats, AppError> {
        let endpoint = EndpointDescriptor::indicator(
            indicator,
            ticker,
            &self.config.interval,
            self.config.output_size,
            DateWindow::Since(chrono::Local::now().date_naive()),
        )?;
        let payload = self.client.fetch(&endpoint).await?;
        let rows = normalize_indicator(&payload, indicator)?;
        store_indicators(&self.pool, &rows, self.config.conflict_policy).await
    }
}
