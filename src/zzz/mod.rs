mod model;

pub use model::{Medal, PlayerInfo, Profile, ProfileDetail, ShowcaseDetail, SocialDetail};

use crate::core::resource::{Expiry, fetch_cached};
use crate::core::{CacheMode, Detail, EnkaClient, EnkaError, Game, RequestContext, Resource};

/// Zenless Zone Zero showcases, cached for the payload's `ttl`.
///
/// ZZZ UIDs are 9 or 10 digits.
#[derive(Debug, Clone)]
pub struct Zzz {
    client: EnkaClient,
    cache_mode: CacheMode,
}

impl Zzz {
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

    /// Fetches the full showcase.
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
    /// Same as [`Zzz::profile`].
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
            game: Game::ZenlessZoneZero,
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
