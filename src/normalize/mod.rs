//! Pure transforms from raw provider payloads into canonical rows
//!
//! Both normalizers are deterministic, perform no I/O and preserve the input
//! record order. An empty `values` sequence yields an empty row vector, not
//! an error.

use crate::constants::DATETIME_FORMAT;
use crate::error::AppError;
use crate::model::responses::ApiResponse;
use crate::model::rows::{BarRow, IndicatorRow};
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// Normalizes an OHLCV time-series payload into bar rows
///
/// The instrument symbol from the metadata section is attached to every
/// record. Prices accept both string and number JSON encodings; volume must
/// be a whole number.
///
/// # Errors
/// [`AppError::Parse`] when a record's datetime does not match
/// `YYYY-MM-DD HH:MM:SS` or a numeric field is missing or malformed.
pub fn normalize_bars(payload: &ApiResponse) -> Result<Vec<BarRow>, AppError> {
    let symbol = payload.meta.symbol.as_str();
    payload
        .values
        .iter()
        .map(|record| {
            Ok(BarRow {
                ticker: symbol.to_string(),
                datetime: parse_datetime(string_field(record, "datetime")?)?,
                open: numeric_field(record, "open")?,
                high: numeric_field(record, "high")?,
                low: numeric_field(record, "low")?,
                close: numeric_field(record, "close")?,
                volume: integer_field(record, "volume")?,
            })
        })
        .collect()
}

/// Normalizes a technical-indicator payload into indicator rows
///
/// The observation value is looked up explicitly at the key named by
/// `indicator`. The provider happens to place that key second in each
/// record, but the position is not relied upon.
///
/// # Errors
/// [`AppError::Parse`] when a record's datetime is malformed or the value at
/// the indicator key is missing or non-numeric.
pub fn normalize_indicator(
    payload: &ApiResponse,
    indicator: &str,
) -> Result<Vec<IndicatorRow>, AppError> {
    let symbol = payload.meta.symbol.as_str();
    payload
        .values
        .iter()
        .map(|record| {
            Ok(IndicatorRow {
                ticker: symbol.to_string(),
                datetime: parse_datetime(string_field(record, "datetime")?)?,
                indicator: indicator.to_string(),
                value: numeric_field(record, indicator)?,
            })
        })
        .collect()
}

/// Parses an observation timestamp in the provider's exact layout
///
/// # Errors
/// [`AppError::Parse`] when the input deviates from `YYYY-MM-DD HH:MM:SS`.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
        .map_err(|e| AppError::Parse(format!("invalid datetime '{raw}': {e}")))
}

fn string_field<'a>(record: &'a Map<String, Value>, key: &str) -> Result<&'a str, AppError> {
    record
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Parse(format!("missing or non-string field '{key}'")))
}

fn numeric_field(record: &Map<String, Value>, key: &str) -> Result<f64, AppError> {
    match record.get(key) {
        Some(Value::String(s)) => s
            .parse::<f64>()
            .map_err(|_| AppError::Parse(format!("non-numeric value '{s}' at field '{key}'"))),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| AppError::Parse(format!("non-numeric value at field '{key}'"))),
        Some(_) => Err(AppError::Parse(format!(
            "non-numeric value at field '{key}'"
        ))),
        None => Err(AppError::Parse(format!("missing field '{key}'"))),
    }
}

fn integer_field(record: &Map<String, Value>, key: &str) -> Result<i64, AppError> {
    match record.get(key) {
        Some(Value::String(s)) => s
            .parse::<i64>()
            .map_err(|_| AppError::Parse(format!("non-integer value '{s}' at field '{key}'"))),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| AppError::Parse(format!("non-integer value at field '{key}'"))),
        Some(_) => Err(AppError::Parse(format!(
            "non-integer value at field '{key}'"
        ))),
        None => Err(AppError::Parse(format!("missing field '{key}'"))),
    }
}
