//! Public client surface + builder.
//! Internals are split into `retry` (policy + `Retry-After`) and `constants` (UA + defaults).

mod constants;
pub(crate) mod retry;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::{Cache, CacheValue, EnkaError};
use crate::{Genshin, StarRail, Users, Zzz};
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};

pub use constants::DEFAULT_CACHE_TTL;
pub use retry::{RetryConfig, is_retryable_status, parse_retry_after};

/// Shared handle to the Enka.Network API.
///
/// Cloning is cheap: the HTTP connection pool and the cache are shared between clones.
#[derive(Clone)]
pub struct EnkaClient {
    http: Client,
    user_agent: String,
    base_url: Url,
    retry: RetryConfig,
    cache: Option<Arc<dyn Cache>>,
}

impl Default for EnkaClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl fmt::Debug for EnkaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnkaClient")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url.as_str())
            .field("retry", &self.retry)
            .field("cache", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}

impl EnkaClient {
    /// Create a new builder.
    pub fn builder() -> EnkaClientBuilder {
        EnkaClientBuilder::default()
    }

    /// Genshin Impact showcases.
    pub fn genshin(&self) -> Genshin {
        Genshin::new(self)
    }

    /// Honkai: Star Rail showcases.
    pub fn hsr(&self) -> StarRail {
        StarRail::new(self)
    }

    /// Zenless Zone Zero showcases.
    pub fn zzz(&self) -> Zzz {
        Zzz::new(self)
    }

    /// Enka user profiles, linked game accounts and saved builds.
    pub fn users(&self) -> Users {
        Users::new(self)
    }

    /// The User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Root every endpoint is built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Active retry policy.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Base URL with `segments` appended, each percent-encoded as a single path segment.
    pub(crate) fn endpoint<I>(&self, segments: I) -> Result<Url, EnkaError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| EnkaError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn cache_get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let value = self.cache.as_ref()?.get(key)?;
        // A value of another type under this key is treated as a miss.
        value.downcast::<T>().ok().map(|v| T::clone(&v))
    }

    pub(crate) fn cache_put<T>(&self, key: &str, value: &T, ttl: Duration)
    where
        T: Clone + Send + Sync + 'static,
    {
        let Some(cache) = &self.cache else {
            return;
        };
        let erased: CacheValue = Arc::new(value.clone());
        cache.set(key, erased, ttl);
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EnkaClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    http: Option<Client>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache: Option<Arc<dyn Cache>>,
    retry: Option<RetryConfig>,
}

impl EnkaClientBuilder {
    /// Override the User-Agent. An empty string keeps the default.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API root (e.g., `https://enka.network/api/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, pools, custom TLS).
    ///
    /// `timeout` and `connect_timeout` are ignored when a client is supplied.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Set a global request timeout (overall). Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Cache responses in `cache`. If not set, caching is disabled.
    pub fn cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the whole retry policy.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Turn automatic retries on or off.
    pub fn retry_enabled(mut self, enabled: bool) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).enabled = enabled;
        self
    }

    /// Total attempts per fetch, initial request included. Default: 3.
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).max_attempts = attempts;
        self
    }

    /// Delay used when `Retry-After` is unavailable and for every 500. Default: 5 seconds.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).default_delay = delay;
        self
    }

    pub fn build(self) -> Result<EnkaClient, EnkaError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(EnkaError::InvalidBaseUrl(base_url.to_string()));
        }

        let user_agent = self
            .user_agent
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| USER_AGENT.to_string());

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(user_agent.as_str())
                    .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(EnkaClient {
            http,
            user_agent,
            base_url,
            retry: self.retry.unwrap_or_default(),
            cache: self.cache,
        })
    }
}
