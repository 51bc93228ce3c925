use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::EndpointDescriptor;
use crate::model::responses::{ApiResponse, decode_payload};
use crate::model::retry::RetryConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Client abstraction for fetching market data
///
/// One call performs exactly one logical fetch against the provider. The
/// trait is the seam between the driver and the network: tests substitute a
/// canned implementation, production uses [`TwelveDataClient`].
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Fetches and decodes the payload identified by the descriptor
    async fn fetch(&self, endpoint: &EndpointDescriptor) -> Result<ApiResponse, AppError>;
}

/// HTTP client for the TwelveData REST API
///
/// Every request waits on the shared rate limiter first, then performs a
/// single GET. The response status is always surfaced: a non-success status
/// is an error, never a logged-and-ignored condition. Provider throttling is
/// retried only when the [`RetryConfig`] explicitly allows it.
pub struct TwelveDataClient {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
    retry: RetryConfig,
}

impl TwelveDataClient {
    /// Creates a new client with retry behavior taken from the environment
    ///
    /// # Arguments
    /// * `config` - Configuration containing the credential, base URL and rate limits
    #[must_use]
    pub fn new(config: Arc<Config>) -> Self {
        Self::with_retry(config, RetryConfig::default())
    }

    /// Creates a new client with an explicit retry configuration
    #[must_use]
    pub fn with_retry(config: Arc<Config>, retry: RetryConfig) -> Self {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Self {
            http_client,
            config,
            rate_limiter,
            retry,
        }
    }

    /// Gets the rate limiter shared by all requests from this client
    #[must_use]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

#[async_trait]
impl MarketDataClient for TwelveDataClient {
    async fn fetch(&self, endpoint: &EndpointDescriptor) -> Result<ApiResponse, AppError> {
        let url = endpoint.to_url(
            &self.config.rest_api.base_url,
            &self.config.credentials.api_key,
        );

        let mut retry_count = 0;
        let max_retries = self.retry.max_retries();
        let delay_secs = self.retry.delay_secs();

        loop {
            // Wait for rate limiter before making request
            self.rate_limiter.wait().await;

            debug!(
                "GET {} symbol={} interval={}",
                endpoint.path, endpoint.symbol, endpoint.interval
            );
            let started = Instant::now();

            let response = self.http_client.get(&url).send().await?;
            let status = response.status();
            debug!("Response status: {} in {:?}", status, started.elapsed());

            if status.is_success() {
                let body = response.text().await?;
                match decode_payload(&body) {
                    Ok(payload) => {
                        debug!(
                            "Decoded {} observation records for {}",
                            payload.values.len(),
                            payload.meta.symbol
                        );
                        return Ok(payload);
                    }
                    Err(AppError::Api { code: 429, message }) => {
                        retry_count += 1;
                        if retry_count > max_retries {
                            error!("Request quota exhausted: {}", message);
                            return Err(AppError::RateLimitExceeded);
                        }
                        warn!(
                            "Provider throttled request (attempt {}): {}. Waiting {} seconds before retry...",
                            retry_count, message, delay_secs
                        );
                        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                        continue;
                    }
                    Err(e) => return Err(e),
                }
            }

            match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    retry_count += 1;
                    if retry_count > max_retries {
                        error!(
                            "Rate limit exceeded after {} attempt(s), no retries left",
                            retry_count
                        );
                        return Err(AppError::RateLimitExceeded);
                    }
                    warn!(
                        "Rate limit exceeded (attempt {}). Waiting {} seconds before retry...",
                        retry_count, delay_secs
                    );
                    tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                }
                _ => {
                    let body = response.text().await.unwrap_or_default();
                    error!("Request failed with status {}: {}", status, body);
                    return Err(AppError::Unexpected(status));
                }
            }
        }
    }
}
