//! Rate-limit aware JSON fetching with a bounded, constant-delay retry loop

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::http_client::create_http_client;
use crate::constants;
use crate::error::AppError;

/// Settings of the fetch client. Built from [`crate::config::Config`] plus
/// the API key found in the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub base_url: String,
    pub api_key: String,
    pub http_timeout_seconds: u64,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub request_delay: Duration,
}

impl FetchConfig {
    /// Settings with the default rate-limit timings
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        FetchConfig {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            max_attempts: constants::retry::MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(constants::retry::RETRY_DELAY_MS),
            request_delay: Duration::from_millis(constants::retry::REQUEST_DELAY_MS),
        }
    }
}

/// The only suspension points of the client go through this trait so the
/// retry cooldown and the request throttle can be observed without waiting.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Issues authenticated GET requests against the API and returns parsed JSON.
///
/// Each call makes at most `max_attempts` attempts. A 429 or a transport
/// failure waits `retry_delay` and tries again; there is no backoff growth
/// and no jitter. Every successful response is followed by `request_delay`
/// before the call returns, which throttles the whole request stream.
pub struct FetchClient<S = TokioSleeper> {
    client: Client,
    config: FetchConfig,
    sleeper: S,
}

impl FetchClient<TokioSleeper> {
    pub fn new(config: FetchConfig) -> Result<Self, AppError> {
        Self::with_sleeper(config, TokioSleeper)
    }
}

impl<S: Sleeper> FetchClient<S> {
    pub fn with_sleeper(config: FetchConfig, sleeper: S) -> Result<Self, AppError> {
        let client = create_http_client(config.http_timeout_seconds, &config.api_key)?;
        Ok(FetchClient {
            client,
            config,
            sleeper,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches `url` and parses the body as JSON.
    ///
    /// # Errors
    /// * `AppError::RetryExhausted` - the final attempt was rate limited
    /// * `AppError::TransportFailure` - the final attempt failed at the transport
    ///   level or with a non-success status other than 429
    /// * `AppError::MalformedResponse` - a successful response was not JSON (not retried)
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Value, AppError> {
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            info!("Fetching data from URL: {url} (attempt {attempt}/{max_attempts})");

            let error = match self.attempt(url).await {
                Ok(value) => {
                    self.sleeper.sleep(self.config.request_delay).await;
                    return Ok(value);
                }
                Err(e) if e.is_retryable() => e,
                Err(e) => return Err(e),
            };

            if attempt == max_attempts {
                error!("Request to {url} failed on final attempt: {error}");
                return Err(match error {
                    AppError::RateLimited { .. } => AppError::retry_exhausted(url, max_attempts),
                    other => other,
                });
            }

            match &error {
                AppError::RateLimited { .. } => warn!(
                    "Rate limit hit. Waiting {:?} before retry {}/{}",
                    self.config.retry_delay,
                    attempt + 1,
                    max_attempts
                ),
                other => warn!(
                    "Request failed (attempt {attempt}/{max_attempts}): {other}. Retrying in {:?}",
                    self.config.retry_delay
                ),
            }
            self.sleeper.sleep(self.config.retry_delay).await;
        }

        Err(AppError::retry_exhausted(url, max_attempts))
    }

    async fn attempt(&self, url: &str) -> Result<Value, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::transport_failure(url, None, e.to_string()))?;

        let status = response.status();
        debug!("Response status: {status}");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::rate_limited(url));
        }
        if !status.is_success() {
            return Err(AppError::transport_failure(
                url,
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport_failure(url, None, e.to_string()))?;
        debug!("Response length: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            error!("Failed to parse API response from {url}: {e}. Body starts with: {preview}");
            AppError::malformed_response(format!("response is not valid JSON: {e}"), url)
        })
    }
}
