//! Outbound REST client configuration for the movies aggregator.

use std::time::Duration;

use moviehub_client::RetryPolicy;
use serde::Deserialize;

/// Where the aggregator finds the two owning services.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RestClientConfig {
    /// Collection URL of the movie-info service.
    pub movie_info_url: String,
    /// Collection URL of the movie-review service.
    pub reviews_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retry settings for MovieInfo lookups.
    pub retry: RetryConfig,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            movie_info_url: "http://localhost:8080/v1/movieinfos".to_string(),
            reviews_url: "http://localhost:8081/v1/reviews".to_string(),
            timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

impl RestClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Fixed-backoff retry settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: usize,
    /// Delay between attempts in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            delay_ms: policy.delay.as_millis() as u64,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_millis(self.delay_ms))
    }
}
