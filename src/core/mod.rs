//! Core components of the `enka-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EnkaClient`] and its builder.
//! - The primary [`EnkaError`] type.
//! - The [`Cache`] contract and the in-memory [`MemoryCache`].
//! - [`RequestContext`] for cancellation and deadlines.
//! - The generic fetch-with-retry engine and resource routing.

/// The pluggable cache contract, cache modes and the in-memory implementation.
pub mod cache;
/// The main client (`EnkaClient`), builder, and configuration.
pub mod client;
pub mod context;
/// The primary error type (`EnkaError`) for the crate.
pub mod error;
pub(crate) mod fetch;
/// Shared data models used across multiple resource families (e.g., `Owner`).
pub mod models;
pub(crate) mod net;
/// Resource routing: validation, cache keys, endpoints.
pub mod resource;

// convenient re-exports so most code can just `use crate::core::EnkaClient`
pub use cache::{Cache, CacheMode, CacheValue, MemoryCache};
pub use client::{
    DEFAULT_CACHE_TTL, EnkaClient, EnkaClientBuilder, RetryConfig, is_retryable_status,
    parse_retry_after,
};
pub use context::RequestContext;
pub use error::EnkaError;
pub use models::{BuildSettings, Owner, PatreonProfile};
pub use resource::{Detail, Game, Resource};
