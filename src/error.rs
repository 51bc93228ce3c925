//! Error taxonomy for the ETL pipeline
//!
//! A single [`AppError`] covers the three stages: transport failures from the
//! fetcher, parse failures from the normalizer, and store rejections from the
//! loader. Unique-violation database errors are surfaced as
//! [`AppError::ConstraintViolation`] so callers can distinguish duplicate
//! natural keys from other database faults.

use reqwest::StatusCode;
use std::fmt;

/// Application-level error for all pipeline stages
#[derive(Debug)]
pub enum AppError {
    /// Network-level failure: connection, timeout, or malformed body
    Network(reqwest::Error),
    /// Non-success HTTP status returned by the provider
    Unexpected(StatusCode),
    /// Error envelope returned by the provider with a success HTTP status
    Api {
        /// Provider error code
        code: i64,
        /// Provider error message
        message: String,
    },
    /// Request quota exhausted and retries (if any) used up
    RateLimitExceeded,
    /// Malformed or missing field encountered during normalization
    Parse(String),
    /// JSON decoding failure
    Json(serde_json::Error),
    /// Duplicate natural key rejected by the store
    ConstraintViolation(String),
    /// Any other database failure
    Database(sqlx::Error),
    /// Invalid caller-supplied input
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Api { code, message } => write!(f, "api error {code}: {message}"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Parse(msg) => write!(f, "parse error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::ConstraintViolation(msg) => write!(f, "constraint violation: {msg}"),
            AppError::Database(e) => write!(f, "database error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return AppError::ConstraintViolation(db.message().to_string());
            }
        }
        AppError::Database(e)
    }
}
