use serde_json::Value;

use super::models::{RawStat, StatEntry, SteamStatsOutput, UserProfile};

pub const UNKNOWN_USER: &str = "Unknown User";

/// 把玩家资料和原始统计数据整理成固定的输出格式，不做任何 I/O
pub fn normalize(profile: &UserProfile, raw_stats: Vec<RawStat>) -> SteamStatsOutput {
    let steam_name = profile
        .persona_name
        .clone()
        .unwrap_or_else(|| UNKNOWN_USER.to_string());
    let minutes = profile.playtime_forever_minutes.unwrap_or(0);

    SteamStatsOutput {
        steam_name,
        game_time: minutes_to_hours(minutes),
        stats: raw_stats.into_iter().map(stat_entry).collect(),
    }
}

/// 分钟转小时，不取整
pub fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / 60.0
}

fn stat_entry(raw: RawStat) -> StatEntry {
    StatEntry {
        name: raw.name,
        value: stringify_value(raw.value),
    }
}

fn stringify_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
