mod model;

pub use model::{DetailInfo, PrivacySettingInfo, Profile, RecordInfo};

use crate::core::resource::{Expiry, fetch_cached};
use crate::core::{CacheMode, Detail, EnkaClient, EnkaError, Game, RequestContext, Resource};

/// Honkai: Star Rail showcases, cached for the payload's `ttl`.
#[derive(Debug, Clone)]
pub struct StarRail {
    client: EnkaClient,
    cache_mode: CacheMode,
}

impl StarRail {
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

    /// Fetches the full showcase for a 9-digit UID.
    ///
    /// # Errors
    ///
    /// `InvalidUid`, `PlayerNotFound`, or any fetch error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ctx), err))]
    pub async fn profile(&self, ctx: &RequestContext, uid: &str) -> Result<Profile, EnkaError> {
        self.fetch(ctx, uid, Detail::Full).await
    }

    /// Fetches player info only (`?info`).
    ///
    /// # Errors
    ///
    /// Same as [`StarRail::profile`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ctx), err))]
    pub async fn player_info(&self, ctx: &RequestContext, uid: &str) -> Result<Profile, EnkaError> {
        self.fetch(ctx, uid, Detail::Basic).await
    }

    async fn fetch(
        &self,
        ctx: &RequestContext,
        uid: &str,
        detail: Detail,
    ) -> Result<Profile, EnkaError> {
        let resource = Resource::Showcase {
            game: Game::StarRail,
            uid,
            detail,
        };
        fetch_cached(
            &self.client,
            ctx,
            resource,
            self.cache_mode,
            Expiry::Payload(Profile::cache_ttl),
        )
        .await
    }
}
