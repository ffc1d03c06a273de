use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{BuildSettings, Game, Owner};

/// An Enka user profile (`/profile/<username>`). Same shape as a showcase owner.
pub type UserProfile = Owner;

/// Linked game accounts keyed by hoyo hash.
pub type Hoyos = HashMap<String, Hoyo>;

/// Saved builds keyed by character id.
pub type Builds = HashMap<String, Vec<Build>>;

/// A game account linked to an Enka profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hoyo {
    /// Present only when `uid_public` is set.
    pub uid: Option<u64>,
    pub uid_public: bool,
    pub public: bool,
    pub verified: bool,
    /// Game-specific player info as shown on the showcase; its shape follows `hoyo_type`.
    pub player_info: Option<serde_json::Value>,
    pub hash: String,
    pub region: Option<String>,
    /// Character display order.
    pub avatar_order: Option<HashMap<String, i64>>,
    pub order: i64,
    pub live_public: bool,
    /// 0 Genshin, 1 Star Rail, 2 ZZZ.
    pub hoyo_type: u8,
}

impl Hoyo {
    /// The title this account belongs to.
    pub fn game(&self) -> Option<Game> {
        Game::from_hoyo_type(self.hoyo_type)
    }
}

/// A saved or live character build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    pub id: u64,
    pub name: String,
    pub avatar_id: String,
    /// Character data in the owning game's showcase format.
    pub avatar_data: serde_json::Value,
    /// `true` for builds mirrored from the in-game showcase rather than saved by the user.
    pub live: bool,
    pub settings: BuildSettings,
    pub public: bool,
    pub image: Option<String>,
    /// Hash of the owning hoyo.
    pub hoyo: String,
    pub order: i64,
    pub hoyo_type: u8,
}

impl Build {
    /// The title this build belongs to.
    pub fn game(&self) -> Option<Game> {
        Game::from_hoyo_type(self.hoyo_type)
    }
}
