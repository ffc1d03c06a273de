//! Models shared by several resource families.

use serde::{Deserialize, Serialize};

/// The Enka user behind a game account, present in showcases when the user verified the UID
/// and left their profile public.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    /// Numeric user id.
    pub id: u64,
    /// Profile hash.
    pub hash: String,
    /// Enka username.
    pub username: String,
    /// Patreon data, present for supporters.
    pub profile: Option<PatreonProfile>,
}

/// Patreon-related profile data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatreonProfile {
    pub bio: String,
    /// Membership tier.
    pub level: u32,
    /// Avatar on Enka.
    pub avatar: Option<String>,
    /// Avatar on Patreon.
    pub image_url: Option<String>,
}

/// Presentation settings of a saved build card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildSettings {
    pub adaptive_color: Option<bool>,
    pub art_source: Option<String>,
    pub caption: Option<String>,
    pub honkard_width: Option<f64>,
    pub transform: Option<String>,
}

/// Longest expiration a payload TTL is allowed to request (one year).
pub(crate) const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Converts a payload TTL to cache seconds; negatives mean "already stale".
pub(crate) fn ttl_secs(ttl: i64) -> u64 {
    u64::try_from(ttl).unwrap_or(0).min(MAX_TTL_SECS)
}
