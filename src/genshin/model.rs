use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::Owner;
use crate::core::models::ttl_secs;

/// A Genshin Impact showcase (`/uid/<uid>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Account summary from the in-game profile.
    pub player_info: PlayerInfo,
    /// Showcased characters. Empty when the showcase is hidden or when only player info
    /// was requested.
    pub avatar_info_list: Vec<AvatarInfo>,
    /// The Enka user who verified this UID, if public.
    pub owner: Option<Owner>,
    /// Seconds until the API refreshes this UID from the game.
    pub ttl: i64,
    pub uid: Option<String>,
}

impl Profile {
    pub(crate) fn cache_ttl(&self) -> u64 {
        ttl_secs(self.ttl)
    }
}

/// Public account summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerInfo {
    pub nickname: String,
    /// Adventure rank.
    pub level: u32,
    pub signature: Option<String>,
    pub world_level: Option<u32>,
    pub name_card_id: Option<u32>,
    pub finish_achievement_num: Option<u32>,
    /// Spiral Abyss floor reached.
    pub tower_floor_index: Option<u32>,
    /// Spiral Abyss chamber reached.
    pub tower_level_index: Option<u32>,
    pub show_avatar_info_list: Vec<ShowAvatarInfo>,
    pub show_name_card_id_list: Vec<u32>,
    pub profile_picture: Option<ProfilePicture>,
    /// Imaginarium Theater act.
    pub theater_act_index: Option<u32>,
    pub theater_mode_index: Option<u32>,
    pub theater_star_index: Option<u32>,
    /// Characters at maximum friendship.
    pub fetter_count: Option<u32>,
}

/// Character card in the profile header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowAvatarInfo {
    pub avatar_id: u32,
    pub level: u32,
    pub costume_id: Option<u32>,
    pub talent_level: Option<u32>,
    pub energy_type: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfilePicture {
    pub avatar_id: Option<u32>,
    pub id: Option<u32>,
}

/// A showcased character.
///
/// Equipment is kept as raw JSON; see the Enka API documentation for its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarInfo {
    pub avatar_id: u32,
    /// Keyed by prop type, e.g. `"4001"` is the character level.
    pub prop_map: HashMap<String, Prop>,
    /// Constellations unlocked.
    pub talent_id_list: Vec<u32>,
    /// Combat stats keyed by fight prop id.
    pub fight_prop_map: HashMap<String, f64>,
    pub skill_depot_id: u32,
    pub inherent_proud_skill_list: Vec<u32>,
    pub skill_level_map: HashMap<String, u32>,
    pub proud_skill_extra_level_map: HashMap<String, u32>,
    pub equip_list: Vec<serde_json::Value>,
    pub fetter_info: Option<FetterInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prop {
    #[serde(rename = "type")]
    pub kind: u32,
    pub ival: Option<String>,
    pub val: Option<String>,
}

/// Friendship level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FetterInfo {
    pub exp_level: u32,
}
