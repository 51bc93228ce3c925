use crate::utils::config::get_env_or_none;

/// Configuration for retrying requests rejected by the provider's quota
///
/// Retrying is strictly opt-in: the default performs zero retries, so a
/// throttled request surfaces immediately as a rate-limit error. Set
/// `MAX_RETRY_COUNT` (and optionally `RETRY_DELAY_SECS`) or use the
/// constructors to enable it.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries on throttling (None = no retries)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries (None = use default 10 seconds)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration that never retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Creates a retry configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None, // use default 10 seconds
        }
    }

    /// Creates a retry configuration with both max retries and custom delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Gets the maximum retry count (0 = never retry)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(0)
    }

    /// Gets the retry delay in seconds (default: 10)
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(10)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_retry_count: Option<u32> = get_env_or_none("MAX_RETRY_COUNT");
        let retry_delay_secs: Option<u64> = get_env_or_none("RETRY_DELAY_SECS");

        Self {
            max_retry_count,
            retry_delay_secs,
        }
    }
}
