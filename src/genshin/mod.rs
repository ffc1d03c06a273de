mod model;

pub use model::{AvatarInfo, FetterInfo, PlayerInfo, Profile, ProfilePicture, Prop, ShowAvatarInfo};

use crate::core::resource::{Expiry, fetch_cached};
use crate::core::{CacheMode, Detail, EnkaClient, EnkaError, Game, RequestContext, Resource};

/// Genshin Impact showcases.
///
/// Results are cached under their UID for as long as the payload's `ttl` says.
///
/// # Example
///
/// ```no_run
/// # use enka_rs::{EnkaClient, Genshin, RequestContext};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EnkaClient::default();
/// let ctx = RequestContext::default();
///
/// let profile = Genshin::new(&client).profile(&ctx, "618285856").await?;
/// println!("{} (AR {})", profile.player_info.nickname, profile.player_info.level);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Genshin {
    client: EnkaClient,
    cache_mode: CacheMode,
}

impl Genshin {
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

    /// Fetches the full showcase: player info and every showcased character.
    ///
    /// # Errors
    ///
    /// `InvalidUid` unless `uid` is 9 digits; `PlayerNotFound` on 404; otherwise any
    /// error of [`EnkaClient::fetch_with_retry`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, ctx), err))]
    pub async fn profile(&self, ctx: &RequestContext, uid: &str) -> Result<Profile, EnkaError> {
        self.fetch(ctx, uid, Detail::Full).await
    }

    /// Fetches player info only (`?info`).
    ///
    /// # Errors
    ///
    /// Same as [`Genshin::profile`].
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
            game: Game::Genshin,
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
