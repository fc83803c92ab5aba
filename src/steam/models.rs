use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 用户库中的一款游戏，字段名与 Steam 保持一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGame {
    #[serde(rename = "appid")]
    pub app_id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub playtime_forever: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_community_visible_stats: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtime_last_played: Option<u64>,
}

/// 玩家资料。私密资料时 Steam 会省略字段，两个字段都可能为空
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default, rename = "personaname")]
    pub persona_name: Option<String>,
    #[serde(default, rename = "playtime_forever")]
    pub playtime_forever_minutes: Option<u64>,
}

/// Steam 返回的原始统计项，value 可能是整数、浮点数或字符串
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawStat {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteamStatsOutput {
    pub steam_name: String,
    pub game_time: f64,
    pub stats: Vec<StatEntry>,
}

// 以下是上游响应的外层包装，缺失的层级一律按空处理

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesEnvelope {
    #[serde(default)]
    pub response: OwnedGamesBody,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwnedGamesBody {
    #[serde(default)]
    pub games: Vec<OwnedGame>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayerSummariesEnvelope {
    #[serde(default)]
    pub response: PlayerSummariesBody,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayerSummariesBody {
    #[serde(default)]
    pub players: Vec<UserProfile>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserStatsEnvelope {
    #[serde(default)]
    pub playerstats: UserStatsBody,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserStatsBody {
    #[serde(default)]
    pub stats: Vec<RawStat>,
}

impl PlayerSummariesEnvelope {
    pub(crate) fn into_profile(self) -> UserProfile {
        self.response.players.into_iter().next().unwrap_or_default()
    }
}
