use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata section of a TwelveData payload
///
/// Only the instrument symbol is required; everything else the provider
/// sends (interval, currency, exchange, ...) is kept loosely typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Instrument symbol the payload refers to
    pub symbol: String,
    /// Remaining metadata fields, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw decoded payload from the provider
///
/// A short-lived, loosely-typed document: a metadata section plus a sequence
/// of observation records. It is consumed and discarded within a single
/// normalizer call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Metadata section
    pub meta: Meta,
    /// Observation records, newest first as the provider sends them
    #[serde(default)]
    pub values: Vec<Map<String, Value>>,
}

/// Error envelope the provider returns inside a success HTTP status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Provider error code
    pub code: i64,
    /// Provider error message
    pub message: String,
    /// Always "error" for this shape
    pub status: String,
}

/// Decodes a response body into a payload, surfacing embedded provider errors
///
/// TwelveData reports quota and bad-request errors as HTTP 200 with
/// `{"code":..,"message":..,"status":"error"}`; that shape is detected before
/// the payload is decoded.
///
/// # Errors
/// [`AppError::Api`] for the provider error envelope, [`AppError::Json`] when
/// the body matches neither shape.
pub fn decode_payload(body: &str) -> Result<ApiResponse, AppError> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("status").and_then(Value::as_str) == Some("error") {
        let err: ApiErrorBody = serde_json::from_value(value)?;
        return Err(AppError::Api {
            code: err.code,
            message: err.message,
        });
    }
    Ok(serde_json::from_value(value)?)
}
