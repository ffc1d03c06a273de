//! Centralized constants for the default endpoint, UA and timings.

use std::time::Duration;

/// Sent when the caller does not configure a User-Agent (or configures an empty one).
pub(crate) const USER_AGENT: &str = concat!("enka-rs/", env!("CARGO_PKG_VERSION"));

/// Enka.Network API root. Game and profile paths are appended as segments.
pub(crate) const DEFAULT_BASE_URL: &str = "https://enka.network/api/";

/// Overall request timeout for the `reqwest::Client` the builder creates itself.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Total attempts for one logical fetch (initial request included).
pub(crate) const MAX_ATTEMPTS: u32 = 3;

/// Wait between transient failures when `Retry-After` is absent, unusable, or the status is 500.
pub(crate) const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Expiration for resources whose payload carries no TTL (users, hoyos, builds).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
