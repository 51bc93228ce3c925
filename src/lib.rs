//! # TwelveData ETL
//!
//! Extract-transform-load pipeline that pulls OHLCV price bars and technical
//! indicators from the TwelveData REST API, normalizes the payloads into two
//! canonical row shapes and persists them into PostgreSQL, keyed by natural
//! key.
//!
//! The pipeline is a fixed sequence of small stages applied per instrument:
//!
//! 1. **Fetch** ([`transport`]) - one rate-limited GET per
//!    (instrument, data-kind) pair, returning a loosely-typed payload.
//! 2. **Normalize** ([`normalize`]) - pure transforms from payloads into
//!    [`model::rows::BarRow`] / [`model::rows::IndicatorRow`].
//! 3. **Store** ([`storage`]) - schema-ensuring, transactional batch
//!    inserts with an explicit conflict policy.
//! 4. **Drive** ([`application::pipeline`]) - sequences the stages over the
//!    configured instruments and indicators, isolating per-iteration
//!    failures.
//!
//! Configuration is environment-driven (see [`application::config::Config`]);
//! request pacing is owned by a token-bucket rate limiter shared across all
//! outbound calls.
//!
//! ## Example
//!
//! ```no_run
//! use twelvedata_etl::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let config = Arc::new(Config::new());
//!     let pool = config.pg_pool().await?;
//!     let client = Arc::new(TwelveDataClient::new(Arc::clone(&config)));
//!
//!     let report = Pipeline::new(config, client, pool).run().await;
//!     info!("Loaded {} bar rows", report.bars.rows_written);
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, rate limiting and the pipeline driver
pub mod application;
/// Global constants and defaults
pub mod constants;
/// Error taxonomy for all pipeline stages
pub mod error;
/// Request, response, row and retry models
pub mod model;
/// Pure payload-to-row transforms
pub mod normalize;
/// Commonly used types, re-exported
pub mod prelude;
/// PostgreSQL persistence
pub mod storage;
/// HTTP transport for the TwelveData API
pub mod transport;
/// Environment and logging helpers
pub mod utils;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version at runtime
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
