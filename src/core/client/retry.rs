use std::time::Duration;

use chrono::{DateTime, Utc};

use super::constants::{DEFAULT_RETRY_DELAY, MAX_ATTEMPTS};

/// Configuration for the automatic retry mechanism.
///
/// Only 429, 500 and 503 are considered transient. Transport errors are never retried.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    ///
    /// When disabled, a transient status is reported on its first occurrence as its own
    /// error (`RateLimited`, `ServerError` or `ServiceUnavailable`).
    pub enabled: bool,
    /// Total number of requests for one logical fetch, the initial one included.
    /// Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Delay used for 500 responses and whenever `Retry-After` is missing or unusable.
    pub default_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: MAX_ATTEMPTS,
            default_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryConfig {
    pub(crate) fn attempts(&self) -> u32 {
        if self.enabled {
            self.max_attempts.max(1)
        } else {
            1
        }
    }
}

/// Statuses the fetcher retries.
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 503)
}

/// Delay before the next attempt after a transient `status`.
///
/// 429 and 503 honour `Retry-After`; 500 always waits `fallback`.
pub(crate) fn retry_delay(status: u16, retry_after: Option<&str>, fallback: Duration) -> Duration {
    match (status, retry_after) {
        (429 | 503, Some(value)) if !value.trim().is_empty() => parse_retry_after(value, fallback),
        _ => fallback,
    }
}

/// Converts a `Retry-After` header value into a wait.
///
/// Accepts integer seconds or an HTTP-date (`Wed, 21 Oct 2015 07:28:00 GMT`). Negative
/// seconds and dates in the past yield zero. Anything else yields `fallback`.
pub fn parse_retry_after(value: &str, fallback: Duration) -> Duration {
    let value = value.trim();

    if let Ok(secs) = value.parse::<i64>() {
        // Negative seconds mean "retry now".
        return Duration::from_secs(u64::try_from(secs).unwrap_or(0));
    }

    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return (date.with_timezone(&Utc) - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
    }

    fallback
}
