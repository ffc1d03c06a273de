//! The generic GET engine shared by every resource family.

use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::client::retry::{is_retryable_status, retry_delay};
use crate::core::net::{self, Received};
use crate::core::{EnkaClient, EnkaError, RequestContext};

/// What to do with one response.
enum Outcome<T> {
    Done(Result<T, EnkaError>),
    Transient { status: u16, retry_after: Option<String> },
}

impl EnkaClient {
    /// GETs `url` and decodes a 200 body as JSON into `T`.
    ///
    /// Statuses 429, 500 and 503 are retried up to [`RetryConfig::max_attempts`] requests in
    /// total, waiting `Retry-After` (429/503) or the default delay (500) in between. When the
    /// budget runs out the call fails with [`EnkaError::RateLimited`], whichever transient
    /// status came last. 400, 404 and 424 map to their own errors without a retry, and so do
    /// transport failures. Both the round trip and the backoff observe `ctx`.
    ///
    /// [`RetryConfig::max_attempts`]: crate::RetryConfig::max_attempts
    pub async fn fetch_with_retry<T>(&self, ctx: &RequestContext, url: Url) -> Result<T, EnkaError>
    where
        T: DeserializeOwned,
    {
        let policy = self.retry_config();
        let max_attempts = policy.attempts();
        let mut last_status = 0;

        for attempt in 1..=max_attempts {
            if let Some(err) = ctx.err() {
                return Err(err);
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(url = %url, attempt, max_attempts, "GET");

            let req = self
                .http()
                .get(url.clone())
                .header(USER_AGENT, self.user_agent());
            let resp = ctx.run(req.send()).await??;
            let received = ctx.run(net::read_response(resp)).await??;

            let (status, retry_after) = match classify(received, &url) {
                Outcome::Done(result) => return result,
                Outcome::Transient {
                    status,
                    retry_after,
                } => (status, retry_after),
            };
            last_status = status;

            if !policy.enabled {
                return Err(transient_error(status, &url));
            }
            if attempt == max_attempts {
                break;
            }

            let delay = retry_delay(status, retry_after.as_deref(), policy.default_delay);

            #[cfg(feature = "tracing")]
            tracing::debug!(url = %url, status, attempt, ?delay, "transient status, retrying");

            ctx.sleep(delay).await?;
        }

        Err(EnkaError::RateLimited {
            url: url.to_string(),
            attempts: max_attempts,
            last_status,
        })
    }
}

fn classify<T: DeserializeOwned>(received: Received, url: &Url) -> Outcome<T> {
    let Received {
        status,
        retry_after,
        body,
    } = received;

    let url_str = || url.to_string();
    let result = match status {
        200 => serde_json::from_str(&body).map_err(|source| EnkaError::Decode {
            url: url_str(),
            source,
        }),
        s if is_retryable_status(s) => {
            return Outcome::Transient {
                status: s,
                retry_after,
            };
        }
        400 => Err(EnkaError::BadRequest { url: url_str() }),
        404 => Err(EnkaError::NotFound { url: url_str() }),
        424 => Err(EnkaError::Maintenance { url: url_str() }),
        other => Err(EnkaError::Status {
            status: other,
            url: url_str(),
        }),
    };
    Outcome::Done(result)
}

/// The error a transient status maps to when it is not retried.
fn transient_error(status: u16, url: &Url) -> EnkaError {
    let url = url.to_string();
    match status {
        500 => EnkaError::ServerError { url },
        503 => EnkaError::ServiceUnavailable { url },
        _ => EnkaError::RateLimited {
            url,
            attempts: 1,
            last_status: status,
        },
    }
}
