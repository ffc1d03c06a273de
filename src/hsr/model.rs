use serde::{Deserialize, Serialize};

use crate::core::Owner;
use crate::core::models::ttl_secs;

/// A Honkai: Star Rail showcase (`/hsr/uid/<uid>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Account summary and showcased characters.
    pub detail_info: Option<DetailInfo>,
    /// Seconds until the API refreshes this UID from the game.
    pub ttl: i64,
    /// The Enka user who verified this UID, if public.
    pub owner: Option<Owner>,
    pub uid: Option<String>,
}

impl Profile {
    pub(crate) fn cache_ttl(&self) -> u64 {
        ttl_secs(self.ttl)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailInfo {
    pub uid: u64,
    pub nickname: String,
    /// Trailblaze level.
    pub level: u32,
    /// Equilibrium level.
    pub world_level: Option<u32>,
    pub signature: Option<String>,
    pub head_icon: Option<u32>,
    pub platform: Option<String>,
    pub friend_count: Option<u32>,
    pub is_display_avatar: bool,
    pub personal_card_id: Option<u32>,
    pub privacy_setting_info: Option<PrivacySettingInfo>,
    pub record_info: Option<RecordInfo>,
    /// Showcased characters; relics and light cones stay raw.
    pub avatar_detail_list: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivacySettingInfo {
    pub display_collection: bool,
    pub display_record: bool,
    pub display_record_team: bool,
    pub display_online_status: bool,
    pub display_diary: bool,
}

/// Collection and progression counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordInfo {
    pub achievement_count: u32,
    pub avatar_count: u32,
    pub equipment_count: u32,
    pub relic_count: u32,
    pub music_count: u32,
    pub book_count: u32,
    pub max_rogue_challenge_score: Option<u32>,
}
