use serde::{Deserialize, Serialize};

use crate::core::Owner;
use crate::core::models::ttl_secs;

/// A Zenless Zone Zero showcase (`/zzz/uid/<uid>`).
///
/// The game payload uses PascalCase keys; `ttl`, `owner` and `uid` are added by Enka.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "PlayerInfo")]
    pub player_info: PlayerInfo,
    /// Seconds until the API refreshes this UID from the game.
    pub ttl: i64,
    pub owner: Option<Owner>,
    pub uid: Option<String>,
}

impl Profile {
    pub(crate) fn cache_ttl(&self) -> u64 {
        ttl_secs(self.ttl)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayerInfo {
    pub social_detail: Option<SocialDetail>,
    /// Absent when only player info was requested.
    pub showcase_detail: Option<ShowcaseDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SocialDetail {
    pub profile_detail: Option<ProfileDetail>,
    pub medal_list: Vec<Medal>,
    /// Profile signature.
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProfileDetail {
    pub uid: u64,
    pub nickname: String,
    /// Inter-Knot level.
    pub level: u32,
    pub title: u32,
    pub avatar_id: u32,
    pub profile_id: u32,
    pub calling_card_id: u32,
    pub platform_type: u32,
}

/// A badge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Medal {
    pub value: u32,
    pub medal_icon: u32,
    pub medal_type: u32,
    pub medal_score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ShowcaseDetail {
    /// Showcased agents, kept raw.
    pub avatar_list: Vec<serde_json::Value>,
}
