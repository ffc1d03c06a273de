use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EnkaError {
    /// An error occurred during an HTTP request (connection, TLS, body read).
    ///
    /// Transport failures are never retried.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments (e.g. `data:` URLs).
    #[error("base URL cannot be used for API paths: {0}")]
    InvalidBaseUrl(String),

    /// A game UID did not match the format required by the title.
    #[error("invalid UID format: {0:?}")]
    InvalidUid(String),

    /// An Enka username was empty.
    #[error("username cannot be empty")]
    InvalidUsername,

    /// A hoyo hash was empty.
    #[error("hoyo hash cannot be empty")]
    InvalidHoyoHash,

    /// The server rejected the identifier format (HTTP 400).
    #[error("identifier rejected by server (400) at {url}")]
    BadRequest {
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned 404 for a resource that has no more specific mapping.
    #[error("resource not found at {url}")]
    NotFound {
        /// The URL that returned the error.
        url: String,
    },

    /// No game profile exists for the UID.
    #[error("player not found: {uid}")]
    PlayerNotFound {
        /// The requested UID.
        uid: String,
    },

    /// No Enka user exists with this username.
    #[error("user not found: {username}")]
    UserNotFound {
        /// The requested username.
        username: String,
    },

    /// The user has no linked game account with this hash.
    #[error("hoyo account {hash} not found for user {username}")]
    HoyoNotFound {
        /// The owning username.
        username: String,
        /// The requested hoyo hash.
        hash: String,
    },

    /// The linked game account has no saved builds.
    #[error("no builds found for hoyo account {hash} of user {username}")]
    BuildsNotFound {
        /// The owning username.
        username: String,
        /// The requested hoyo hash.
        hash: String,
    },

    /// Game servers are under maintenance (HTTP 424).
    #[error("game server maintenance (424) at {url}")]
    Maintenance {
        /// The URL that returned the error.
        url: String,
    },

    /// The API reported an internal error (HTTP 500) and retries were disabled.
    #[error("server error (500) at {url}")]
    ServerError {
        /// The URL that returned the error.
        url: String,
    },

    /// The API is temporarily unavailable (HTTP 503) and retries were disabled.
    #[error("service unavailable (503) at {url}")]
    ServiceUnavailable {
        /// The URL that returned the error.
        url: String,
    },

    /// Transient failures (429, 500 or 503) persisted through the whole retry budget.
    ///
    /// `last_status` tells which transient status ended the sequence.
    #[error("rate limited at {url} after {attempts} attempt(s), last status {last_status}")]
    RateLimited {
        /// The URL that was requested.
        url: String,
        /// How many requests were sent.
        attempts: u32,
        /// The status of the final response.
        last_status: u16,
    },

    /// A 200 response body could not be decoded into the expected type.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The URL that returned the body.
        url: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The server returned a status code outside the documented contract.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The request context was cancelled.
    #[error("request cancelled")]
    Cancelled,

    /// The request context deadline passed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

impl EnkaError {
    /// Returns `true` for every not-found flavour, generic or resource-specific.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::PlayerNotFound { .. }
                | Self::UserNotFound { .. }
                | Self::HoyoNotFound { .. }
                | Self::BuildsNotFound { .. }
        )
    }

    /// Returns `true` when the error was raised by local identifier validation
    /// or by the server rejecting the identifier.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(
            self,
            Self::InvalidUid(_)
                | Self::InvalidUsername
                | Self::InvalidHoyoHash
                | Self::BadRequest { .. }
        )
    }

    /// Returns `true` when the request context ended the call.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}
