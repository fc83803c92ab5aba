/// 用户游戏列表缓存键前缀
const GAMES_PREFIX: &str = "games:";

/// 单款游戏统计结果缓存键前缀
const STATS_PREFIX: &str = "stats:";

/// 游戏名统一转小写，和按名字查找游戏时的大小写规则一致
pub fn normalize_game_name(game_name: &str) -> String {
    game_name.to_lowercase()
}

/// 生成用户游戏列表缓存键
pub fn games_key(steam_id: &str) -> String {
    format!("{}{}", GAMES_PREFIX, steam_id)
}

/// 生成用户单款游戏统计缓存键
pub fn stats_key(steam_id: &str, game_name: &str) -> String {
    format!("{}{}:{}", STATS_PREFIX, steam_id, normalize_game_name(game_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn games_key_uses_steam_id_verbatim() {
        assert_eq!(games_key("76561198000000000"), "games:76561198000000000");
    }

    #[test]
    fn stats_key_is_case_insensitive_on_game_name() {
        assert_eq!(
            stats_key("76561198000000000", "Half-Life 2"),
            "stats:76561198000000000:half-life 2"
        );
        assert_eq!(
            stats_key("1", "COUNTER-STRIKE"),
            stats_key("1", "counter-strike")
        );
    }
}
