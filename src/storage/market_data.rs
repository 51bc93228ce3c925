//! PostgreSQL persistence for canonical rows
//!
//! Two tables, created on demand and keyed by natural key:
//! `bar_data (ticker, datetime)` and
//! `indicator_data (ticker, datetime, indicator)`. Each persist call ensures
//! the schema, then writes the whole batch inside one transaction; either
//! every row commits or none do.

use crate::error::AppError;
use crate::model::rows::{BarRow, IndicatorRow};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// How the store resolves a duplicate natural key
///
/// Under `Reject` a re-run over an already-loaded window fails the whole
/// batch with a constraint violation; `Ignore` and `Overwrite` make re-runs
/// idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Plain INSERT; a duplicate natural key fails the whole batch
    Reject,
    /// `ON CONFLICT ... DO NOTHING`; duplicate rows are skipped
    Ignore,
    /// `ON CONFLICT ... DO UPDATE`; duplicate rows replace the stored values
    Overwrite,
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConflictPolicy::Reject => "reject",
            ConflictPolicy::Ignore => "ignore",
            ConflictPolicy::Overwrite => "overwrite",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(ConflictPolicy::Reject),
            "ignore" => Ok(ConflictPolicy::Ignore),
            "overwrite" => Ok(ConflictPolicy::Overwrite),
            other => Err(format!("unknown conflict policy: {other}")),
        }
    }
}

/// Storage statistics for tracking one persist call
#[derive(Debug, Default)]
pub struct StorageStats {
    /// Number of rows written to the database
    pub inserted: usize,
    /// Number of rows skipped by the conflict policy
    pub skipped: usize,
    /// Total number of rows processed
    pub total_processed: usize,
}

/// Initializes the bar_data table in PostgreSQL
///
/// Idempotent; safe to call on every persist.
pub async fn initialize_bar_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    debug!("Ensuring bar_data table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bar_data (
            ticker VARCHAR(10) NOT NULL,
            datetime TIMESTAMP NOT NULL,
            open DECIMAL(10,2),
            high DECIMAL(10,2),
            low DECIMAL(10,2),
            close DECIMAL(10,2),
            volume BIGINT,
            PRIMARY KEY (ticker, datetime)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Initializes the indicator_data table in PostgreSQL
///
/// Idempotent; safe to call on every persist.
pub async fn initialize_indicator_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    debug!("Ensuring indicator_data table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS indicator_data (
            ticker VARCHAR(10) NOT NULL,
            datetime TIMESTAMP NOT NULL,
            indicator VARCHAR(10) NOT NULL,
            value DECIMAL(10,2),
            PRIMARY KEY (ticker, datetime, indicator)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// INSERT statement for bar rows under the given conflict policy
#[must_use]
pub fn bar_insert_sql(policy: ConflictPolicy) -> &'static str {
    match policy {
        ConflictPolicy::Reject => {
            r#"
            INSERT INTO bar_data (ticker, datetime, open, high, low, close, volume)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#
        }
        ConflictPolicy::Ignore => {
            r#"
            INSERT INTO bar_data (ticker, datetime, open, high, low, close, volume)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (ticker, datetime) DO NOTHING
            "#
        }
        ConflictPolicy::Overwrite => {
            r#"
            INSERT INTO bar_data (ticker, datetime, open, high, low, close, volume)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (ticker, datetime)
            DO UPDATE SET
                open = EXCLUDED.open,
                high = EXCLUDED.high,
                low = EXCLUDED.low,
                close = EXCLUDED.close,
                volume = EXCLUDED.volume
            "#
        }
    }
}

/// INSERT statement for indicator rows under the given conflict policy
#[must_use]
pub fn indicator_insert_sql(policy: ConflictPolicy) -> &'static str {
    match policy {
        ConflictPolicy::Reject => {
            r#"
            INSERT INTO indicator_data (ticker, datetime, indicator, value)
            VALUES ($1, $2, $3, $4)
            "#
        }
        ConflictPolicy::Ignore => {
            r#"
            INSERT INTO indicator_data (ticker, datetime, indicator, value)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (ticker, datetime, indicator) DO NOTHING
            "#
        }
        ConflictPolicy::Overwrite => {
            r#"
            INSERT INTO indicator_data (ticker, datetime, indicator, value)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (ticker, datetime, indicator)
            DO UPDATE SET value = EXCLUDED.value
            "#
        }
    }
}

/// Stores a batch of bar rows in one transaction
///
/// Ensures the schema first, then inserts every row and commits. A
/// constraint violation under [`ConflictPolicy::Reject`] aborts the whole
/// batch: zero rows are committed. An empty batch is a no-op.
///
/// # Returns
/// * `Result<StorageStats, AppError>` - Insert/skip counts or an error
pub async fn store_bars(
    pool: &PgPool,
    bars: &[BarRow],
    policy: ConflictPolicy,
) -> Result<StorageStats, AppError> {
    initialize_bar_table(pool).await?;

    let mut stats = StorageStats::default();
    let mut tx = pool.begin().await?;

    info!("Persisting {} bar rows (policy: {})", bars.len(), policy);

    for bar in bars {
        stats.total_processed += 1;

        let result = sqlx::query(bar_insert_sql(policy))
            .bind(&bar.ticker)
            .bind(bar.datetime)
            .bind(bar.open)
            .bind(bar.high)
            .bind(bar.low)
            .bind(bar.close)
            .bind(bar.volume)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() > 0 {
            stats.inserted += 1;
        } else {
            stats.skipped += 1;
        }
    }

    tx.commit().await?;
    Ok(stats)
}

/// Stores a batch of indicator rows in one transaction
///
/// Same contract as [`store_bars`]: schema ensured, all-or-nothing commit,
/// empty batch is a no-op.
pub async fn store_indicators(
    pool: &PgPool,
    rows: &[IndicatorRow],
    policy: ConflictPolicy,
) -> Result<StorageStats, AppError> {
    initialize_indicator_table(pool).await?;

    let mut stats = StorageStats::default();
    let mut tx = pool.begin().await?;

    info!("Persisting {} indicator rows (policy: {})", rows.len(), policy);

    for row in rows {
        stats.total_processed += 1;

        let result = sqlx::query(indicator_insert_sql(policy))
            .bind(&row.ticker)
            .bind(row.datetime)
            .bind(&row.indicator)
            .bind(row.value)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() > 0 {
            stats.inserted += 1;
        } else {
            stats.skipped += 1;
        }
    }

    tx.commit().await?;
    Ok(stats)
}
