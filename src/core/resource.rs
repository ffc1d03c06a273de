//! Resource routing and the cache-backed request path.
//!
//! A [`Resource`] knows how to validate its identifiers, which cache key it lives under,
//! which URL serves it and which error a 404 becomes. [`fetch_cached`] drives the
//! cache → network → cache sequence for any of them.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::core::{CacheMode, EnkaClient, EnkaError, RequestContext};

/// Game titles served by Enka.Network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Game {
    /// Genshin Impact.
    Genshin,
    /// Honkai: Star Rail.
    StarRail,
    /// Zenless Zone Zero.
    ZenlessZoneZero,
}

impl Game {
    /// Maps the `hoyo_type` number used in user-profile payloads.
    pub fn from_hoyo_type(hoyo_type: u8) -> Option<Self> {
        match hoyo_type {
            0 => Some(Self::Genshin),
            1 => Some(Self::StarRail),
            2 => Some(Self::ZenlessZoneZero),
            _ => None,
        }
    }

    /// Cache-key tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Genshin => "genshin",
            Self::StarRail => "hsr",
            Self::ZenlessZoneZero => "zzz",
        }
    }

    /// Path prefix in front of `uid/<uid>`. Genshin lives at the API root.
    fn path_prefix(self) -> Option<&'static str> {
        match self {
            Self::Genshin => None,
            Self::StarRail => Some("hsr"),
            Self::ZenlessZoneZero => Some("zzz"),
        }
    }

    /// Whether `uid` has the shape this title issues: 9 digits, or 9–10 for ZZZ.
    pub fn is_valid_uid(self, uid: &str) -> bool {
        let len_ok = match self {
            Self::Genshin | Self::StarRail => uid.len() == 9,
            Self::ZenlessZoneZero => matches!(uid.len(), 9 | 10),
        };
        len_ok && uid.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Genshin => "Genshin Impact",
            Self::StarRail => "Honkai: Star Rail",
            Self::ZenlessZoneZero => "Zenless Zone Zero",
        })
    }
}

/// How much of a showcase to request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Detail {
    /// Player info plus the character showcase.
    #[default]
    Full,
    /// Player info only (`?info`), a much smaller payload.
    Basic,
}

/// One addressable resource of the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource<'a> {
    /// A game showcase by UID.
    Showcase {
        /// Title the UID belongs to.
        game: Game,
        /// Game UID.
        uid: &'a str,
        /// Full showcase or player info only.
        detail: Detail,
    },
    /// An Enka user profile.
    User {
        /// Enka username.
        username: &'a str,
    },
    /// All game accounts linked to an Enka user.
    Hoyos {
        /// Enka username.
        username: &'a str,
    },
    /// One linked game account.
    Hoyo {
        /// Enka username.
        username: &'a str,
        /// Hoyo hash.
        hash: &'a str,
    },
    /// Saved builds of one linked game account.
    Builds {
        /// Enka username.
        username: &'a str,
        /// Hoyo hash.
        hash: &'a str,
    },
}

impl Resource<'_> {
    /// Checks identifier formats. Runs before any cache or network access.
    pub fn validate(&self) -> Result<(), EnkaError> {
        match *self {
            Self::Showcase { game, uid, .. } => {
                if game.is_valid_uid(uid) {
                    Ok(())
                } else {
                    Err(EnkaError::InvalidUid(uid.to_owned()))
                }
            }
            Self::User { username } | Self::Hoyos { username } => non_empty_username(username),
            Self::Hoyo { username, hash } | Self::Builds { username, hash } => {
                non_empty_username(username)?;
                if hash.is_empty() {
                    return Err(EnkaError::InvalidHoyoHash);
                }
                Ok(())
            }
        }
    }

    /// Deterministic cache key: family tag, then each parameter percent-encoded, `/`-joined.
    ///
    /// ```
    /// use enka_rs::{Detail, Game, Resource};
    ///
    /// let basic = Resource::Showcase {
    ///     game: Game::StarRail,
    ///     uid: "800000000",
    ///     detail: Detail::Basic,
    /// };
    /// assert_eq!(basic.cache_key(), "hsr/800000000/info");
    ///
    /// let builds = Resource::Builds { username: "Algoinde", hash: "4Wjv2e" };
    /// assert_eq!(builds.cache_key(), "user/Algoinde/hoyos/4Wjv2e/builds");
    /// ```
    pub fn cache_key(&self) -> String {
        let mut key = String::new();
        match *self {
            Self::Showcase { game, uid, detail } => {
                key.push_str(game.tag());
                push_param(&mut key, uid);
                if detail == Detail::Basic {
                    key.push_str("/info");
                }
            }
            Self::User { username } => {
                key.push_str("user");
                push_param(&mut key, username);
            }
            Self::Hoyos { username } => {
                key.push_str("user");
                push_param(&mut key, username);
                key.push_str("/hoyos");
            }
            Self::Hoyo { username, hash } => {
                key.push_str("user");
                push_param(&mut key, username);
                key.push_str("/hoyos");
                push_param(&mut key, hash);
            }
            Self::Builds { username, hash } => {
                key.push_str("user");
                push_param(&mut key, username);
                key.push_str("/hoyos");
                push_param(&mut key, hash);
                key.push_str("/builds");
            }
        }
        key
    }

    pub(crate) fn url(&self, client: &EnkaClient) -> Result<Url, EnkaError> {
        let url = match *self {
            Self::Showcase { game, uid, detail } => {
                let mut url = match game.path_prefix() {
                    Some(prefix) => client.endpoint([prefix, "uid", uid])?,
                    None => client.endpoint(["uid", uid])?,
                };
                if detail == Detail::Basic {
                    url.set_query(Some("info"));
                }
                url
            }
            Self::User { username } => client.endpoint(["profile", username])?,
            Self::Hoyos { username } => client.endpoint(["profile", username, "hoyos"])?,
            Self::Hoyo { username, hash } => {
                let mut url = client.endpoint(["profile", username, "hoyos", hash])?;
                url.set_query(Some("format=json"));
                url
            }
            Self::Builds { username, hash } => {
                client.endpoint(["profile", username, "hoyos", hash, "builds"])?
            }
        };
        Ok(url)
    }

    /// Resource-specific replacement for a generic 404.
    pub(crate) fn not_found(&self) -> EnkaError {
        match *self {
            Self::Showcase { uid, .. } => EnkaError::PlayerNotFound {
                uid: uid.to_owned(),
            },
            Self::User { username } | Self::Hoyos { username } => EnkaError::UserNotFound {
                username: username.to_owned(),
            },
            Self::Hoyo { username, hash } => EnkaError::HoyoNotFound {
                username: username.to_owned(),
                hash: hash.to_owned(),
            },
            Self::Builds { username, hash } => EnkaError::BuildsNotFound {
                username: username.to_owned(),
                hash: hash.to_owned(),
            },
        }
    }
}

fn non_empty_username(username: &str) -> Result<(), EnkaError> {
    if username.is_empty() {
        Err(EnkaError::InvalidUsername)
    } else {
        Ok(())
    }
}

fn push_param(key: &mut String, param: &str) {
    key.push('/');
    key.extend(byte_serialize(param.as_bytes()));
}

/// Where the cache expiration of a fetched payload comes from.
pub(crate) enum Expiry<T> {
    /// Seconds carried in the payload.
    Payload(fn(&T) -> u64),
    /// Same expiration for every payload.
    Fixed(Duration),
}

impl<T> Expiry<T> {
    fn of(&self, value: &T) -> Duration {
        match self {
            Self::Payload(ttl) => Duration::from_secs(ttl(value)),
            Self::Fixed(d) => *d,
        }
    }
}

/// Validate, consult the cache, fetch on miss, store, translate 404.
pub(crate) async fn fetch_cached<T>(
    client: &EnkaClient,
    ctx: &RequestContext,
    resource: Resource<'_>,
    cache_mode: CacheMode,
    expiry: Expiry<T>,
) -> Result<T, EnkaError>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    resource.validate()?;

    let key = resource.cache_key();
    if cache_mode.reads()
        && let Some(hit) = client.cache_get::<T>(&key)
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, "cache hit");
        return Ok(hit);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(key = %key, ?cache_mode, "cache miss");

    let url = resource.url(client)?;
    let value: T = client
        .fetch_with_retry(ctx, url)
        .await
        .map_err(|e| match e {
            EnkaError::NotFound { .. } => resource.not_found(),
            other => other,
        })?;

    let ttl = expiry.of(&value);
    // A zero TTL would be expired on arrival.
    if cache_mode.writes() && !ttl.is_zero() {
        client.cache_put(&key, &value, ttl);
    }

    Ok(value)
}
