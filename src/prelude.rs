//! # TwelveData ETL Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use twelvedata_etl::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the ETL pipeline
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// PIPELINE
// ============================================================================

/// Pipeline driver and run reporting
pub use crate::application::pipeline::{Pipeline, PipelineReport, StageReport};

/// Rate limiter shared by all outbound requests
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// TRANSPORT
// ============================================================================

/// Client trait for fetching market data
pub use crate::transport::http_client::MarketDataClient;

/// Production HTTP client for the TwelveData API
pub use crate::transport::http_client::TwelveDataClient;

// ============================================================================
// MODELS
// ============================================================================

/// Endpoint descriptors and date windows
pub use crate::model::requests::{DateWindow, EndpointDescriptor};

/// Raw payload models
pub use crate::model::responses::{ApiErrorBody, ApiResponse, Meta, decode_payload};

/// Retry configuration for provider throttling
pub use crate::model::retry::RetryConfig;

/// Canonical row types
pub use crate::model::rows::{BarRow, IndicatorRow};

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Pure payload-to-row transforms
pub use crate::normalize::{normalize_bars, normalize_indicator, parse_datetime};

// ============================================================================
// STORAGE
// ============================================================================

/// Database configuration
pub use crate::storage::config::DatabaseConfig;

/// Persistence operations and conflict policy
pub use crate::storage::market_data::{
    ConflictPolicy, StorageStats, initialize_bar_table, initialize_indicator_table, store_bars,
    store_indicators,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{NaiveDate, NaiveDateTime};
