use crate::error::AppError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Interval grammar accepted by the provider: 1min, 30min, 1h, 1day, 1week, 1month, ...
static INTERVAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]\d*(min|h|day|week|month)$").expect("valid interval pattern"));

/// Date window selecting which observations a request covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DateWindow {
    /// The provider's relative "today" window
    Today,
    /// All observations from the given start date onwards
    Since(NaiveDate),
}

impl DateWindow {
    /// Renders the window as the query parameter the provider expects
    pub fn to_query_param(&self) -> String {
        match self {
            DateWindow::Today => String::from("date=today"),
            DateWindow::Since(date) => format!("start_date={}", date.format("%Y-%m-%d")),
        }
    }
}

/// Fully determines one outbound market-data request
///
/// The descriptor carries everything that identifies the remote resource:
/// endpoint path, instrument symbol, sampling interval, output size and date
/// window. The transport layer supplies the base URL and the credential when
/// rendering the final URL.
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Endpoint path segment: "time_series" for bars, the indicator name otherwise
    pub path: String,
    /// Instrument symbol
    pub symbol: String,
    /// Sampling interval (e.g. "30min")
    pub interval: String,
    /// Number of observation records requested
    pub output_size: u32,
    /// Date window covered by the request
    pub window: DateWindow,
}

impl EndpointDescriptor {
    /// Builds a descriptor for the OHLCV time-series endpoint
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when the symbol is empty or the
    /// interval does not match the provider grammar.
    pub fn time_series(
        symbol: &str,
        interval: &str,
        output_size: u32,
        window: DateWindow,
    ) -> Result<Self, AppError> {
        Self::build("time_series", symbol, interval, output_size, window)
    }

    /// Builds a descriptor for a technical-indicator endpoint
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when the indicator name or symbol
    /// is empty, or the interval does not match the provider grammar.
    pub fn indicator(
        indicator: &str,
        symbol: &str,
        interval: &str,
        output_size: u32,
        window: DateWindow,
    ) -> Result<Self, AppError> {
        if indicator.trim().is_empty() {
            return Err(AppError::InvalidInput(String::from(
                "indicator name must not be empty",
            )));
        }
        Self::build(indicator, symbol, interval, output_size, window)
    }

    fn build(
        path: &str,
        symbol: &str,
        interval: &str,
        output_size: u32,
        window: DateWindow,
    ) -> Result<Self, AppError> {
        if symbol.trim().is_empty() {
            return Err(AppError::InvalidInput(String::from(
                "symbol must not be empty",
            )));
        }
        if !Self::is_valid_interval(interval) {
            return Err(AppError::InvalidInput(format!(
                "invalid interval: {interval}"
            )));
        }
        Ok(Self {
            path: path.to_string(),
            symbol: symbol.to_string(),
            interval: interval.to_string(),
            output_size,
            window,
        })
    }

    /// Checks an interval string against the provider grammar
    #[must_use]
    pub fn is_valid_interval(interval: &str) -> bool {
        INTERVAL_RE.is_match(interval)
    }

    /// Renders the full request URL for this descriptor
    ///
    /// # Arguments
    /// * `base_url` - REST API base URL
    /// * `api_key` - API credential added as a query parameter
    pub fn to_url(&self, base_url: &str, api_key: &str) -> String {
        format!(
            "{}/{}?apikey={}&interval={}&symbol={}&outputsize={}&{}",
            base_url.trim_end_matches('/'),
            self.path,
            api_key,
            self.interval,
            self.symbol,
            self.output_size,
            self.window.to_query_param(),
        )
    }
}
