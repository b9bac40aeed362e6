//! Retry policy for downstream lookups.
//!
//! Uses `backon` with a constant delay. Only server-side failures (5xx) are
//! retried; client errors and transport failures are returned immediately.

use std::time::Duration;

use backon::ConstantBuilder;

use crate::error::ClientError;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: usize = 3;
/// Default delay between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Fixed-backoff retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total calls are `max_retries + 1`.
    pub max_retries: usize,
    /// Delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: usize, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }

    /// Backoff builder for `backon::Retryable::retry`.
    pub fn backoff(&self) -> ConstantBuilder {
        ConstantBuilder::default()
            .with_delay(self.delay)
            .with_max_times(self.max_retries)
    }
}

/// Determines if a failed lookup is worth repeating (5xx only).
pub fn is_retryable(err: &ClientError) -> bool {
    err.is_server_error()
}
