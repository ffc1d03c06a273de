mod model;

pub use model::{Build, Builds, Hoyo, Hoyos, UserProfile};

use crate::core::resource::{Expiry, fetch_cached};
use crate::core::{CacheMode, DEFAULT_CACHE_TTL, EnkaClient, EnkaError, RequestContext, Resource};

/// Enka user profiles, their linked game accounts ("hoyos") and saved builds.
///
/// These payloads carry no TTL, so results are cached for [`DEFAULT_CACHE_TTL`].
#[derive(Debug, Clone)]
pub struct Users {
    client: EnkaClient,
    cache_mode: CacheMode,
}

impl Users {
    pub fn new(client: &EnkaClient) -> Self {
        Self {
            client: client.clone(),
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the cache mode for all subsequent API calls made through this handle.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Fetches a user profile.
    ///
    /// # Errors
    ///
    /// `InvalidUsername` for an empty name, `UserNotFound` on 404, or any fetch error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ctx), err))]
    pub async fn profile(
        &self,
        ctx: &RequestContext,
        username: &str,
    ) -> Result<UserProfile, EnkaError> {
        self.fetch(ctx, Resource::User { username }).await
    }

    /// Lists the game accounts linked to `username`.
    ///
    /// # Errors
    ///
    /// `InvalidUsername`, `UserNotFound`, or any fetch error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ctx), err))]
    pub async fn hoyos(&self, ctx: &RequestContext, username: &str) -> Result<Hoyos, EnkaError> {
        self.fetch(ctx, Resource::Hoyos { username }).await
    }

    /// Fetches one linked game account.
    ///
    /// # Errors
    ///
    /// `InvalidUsername`, `InvalidHoyoHash`, `HoyoNotFound`, or any fetch error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ctx), err))]
    pub async fn hoyo(
        &self,
        ctx: &RequestContext,
        username: &str,
        hash: &str,
    ) -> Result<Hoyo, EnkaError> {
        self.fetch(ctx, Resource::Hoyo { username, hash }).await
    }

    /// Fetches the builds saved for one linked game account, keyed by character id.
    ///
    /// # Errors
    ///
    /// `InvalidUsername`, `InvalidHoyoHash`, `BuildsNotFound`, or any fetch error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ctx), err))]
    pub async fn builds(
        &self,
        ctx: &RequestContext,
        username: &str,
        hash: &str,
    ) -> Result<Builds, EnkaError> {
        self.fetch(ctx, Resource::Builds { username, hash }).await
    }

    async fn fetch<T>(&self, ctx: &RequestContext, resource: Resource<'_>) -> Result<T, EnkaError>
    where
        T: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
    {
        fetch_cached(
            &self.client,
            ctx,
            resource,
            self.cache_mode,
            Expiry::Fixed(DEFAULT_CACHE_TTL),
        )
        .await
    }
}
