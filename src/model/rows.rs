use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// One OHLCV price bar for an instrument at a point in time
///
/// `(ticker, datetime)` is the natural key in the bar table. Timestamps are
/// provider-local; no timezone conversion is applied anywhere in the
/// pipeline.
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRow {
    /// Instrument symbol (at most 10 characters in storage)
    pub ticker: String,
    /// Observation timestamp, second precision
    pub datetime: NaiveDateTime,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: i64,
}

/// One technical-indicator observation for an instrument at a point in time
///
/// `(ticker, datetime, indicator)` is the natural key in the indicator table.
#[derive(Debug, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    /// Instrument symbol
    pub ticker: String,
    /// Observation timestamp, second precision
    pub datetime: NaiveDateTime,
    /// Indicator name (e.g. "adx", "rsi")
    pub indicator: String,
    /// Observation value
    pub value: f64,
}
