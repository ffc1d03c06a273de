//! enka-rs: async client for the [Enka.Network](https://enka.network) API.
//!
//! Fetches Genshin Impact, Honkai: Star Rail and Zenless Zone Zero showcases by UID, plus
//! Enka user profiles with their linked game accounts and saved builds.
//!
//! Every call goes through one fetch engine that retries 429/500/503 responses (honouring
//! `Retry-After`) and, when a [`Cache`] is configured, stores results for the TTL the API
//! reports, or five minutes for payloads without one.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use enka_rs::{EnkaClient, MemoryCache, RequestContext};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), enka_rs::EnkaError> {
//! let client = EnkaClient::builder()
//!     .user_agent("my-discord-bot/1.0")
//!     .cache(Arc::new(MemoryCache::new()))
//!     .build()?;
//!
//! let ctx = RequestContext::with_timeout(Duration::from_secs(15));
//! let star_rail = client.hsr().profile(&ctx, "800000000").await?;
//! let hoyos = client.users().hoyos(&ctx, "Algoinde").await?;
//! println!("{:?} / {} linked accounts", star_rail.detail_info.map(|d| d.nickname), hoyos.len());
//! # Ok(())
//! # }
//! ```
//!
//! Enable the `tracing` feature to get spans for each call and debug events for retries and
//! cache hits.

pub mod core;
pub mod genshin;
pub mod hsr;
pub mod users;
pub mod zzz;

pub use crate::core::{
    Cache, CacheMode, CacheValue, DEFAULT_CACHE_TTL, Detail, EnkaClient, EnkaClientBuilder,
    EnkaError, Game, MemoryCache, Owner, RequestContext, Resource, RetryConfig, is_retryable_status,
    parse_retry_after,
};
pub use genshin::Genshin;
pub use hsr::StarRail;
pub use users::Users;
pub use zzz::Zzz;

pub use tokio_util::sync::CancellationToken;
