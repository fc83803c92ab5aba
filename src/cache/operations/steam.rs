use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::CacheStore;
use crate::cache::keys::steam_keys;
use crate::steam::{OwnedGame, SteamStatsOutput};

/// 默认缓存时间：1小时
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Steam 数据缓存操作
///
/// 缓存后端出错时不会让请求失败：读失败当作未命中，写失败只记日志。
#[derive(Clone)]
pub struct SteamCacheOperations {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl SteamCacheOperations {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// 获取缓存的用户游戏列表
    pub async fn get_cached_games(&self, steam_id: &str) -> Option<Vec<OwnedGame>> {
        self.read(&steam_keys::games_key(steam_id)).await
    }

    /// 缓存用户游戏列表
    pub async fn cache_games(&self, steam_id: &str, games: &[OwnedGame]) {
        self.write(&steam_keys::games_key(steam_id), games).await
    }

    /// 获取缓存的游戏统计结果
    pub async fn get_cached_stats(
        &self,
        steam_id: &str,
        game_name: &str,
    ) -> Option<SteamStatsOutput> {
        self.read(&steam_keys::stats_key(steam_id, game_name)).await
    }

    /// 缓存游戏统计结果
    pub async fn cache_stats(&self, steam_id: &str, game_name: &str, stats: &SteamStatsOutput) {
        self.write(&steam_keys::stats_key(steam_id, game_name), stats)
            .await
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = match self.store.get(key).await {
            Ok(Some(json)) => json,
            Ok(None) => {
                tracing::debug!(key, "cache miss");
                return None;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(value) => {
                tracing::debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "cached payload could not be decoded");
                None
            }
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize cache payload");
                return;
            }
        };

        if let Err(e) = self.store.set(key, json, self.ttl).await {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::error::CacheError;
    use crate::steam::StatEntry;
    use async_trait::async_trait;

    struct BrokenStore;

    #[async_trait]
    impl CacheStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(serde_json::from_str::<u8>("x").unwrap_err().into())
        }

        async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CacheError> {
            Err(serde_json::from_str::<u8>("x").unwrap_err().into())
        }
    }

    fn game(app_id: u64, name: &str) -> OwnedGame {
        OwnedGame {
            app_id,
            name: name.to_string(),
            playtime_forever: 0,
            img_icon_url: None,
            has_community_visible_stats: None,
            rtime_last_played: None,
        }
    }

    #[tokio::test]
    async fn games_are_stored_under_games_key() {
        let store = Arc::new(MemoryCache::new());
        let ops = SteamCacheOperations::new(store.clone(), DEFAULT_CACHE_TTL);

        ops.cache_games("42", &[game(10, "Counter-Strike")]).await;

        let raw = store.get("games:42").await.unwrap().unwrap();
        assert!(raw.contains("\"appid\":10"));
        assert_eq!(
            ops.get_cached_games("42").await,
            Some(vec![game(10, "Counter-Strike")])
        );
    }

    #[tokio::test]
    async fn stats_lookup_ignores_game_name_case() {
        let ops = SteamCacheOperations::new(Arc::new(MemoryCache::new()), DEFAULT_CACHE_TTL);
        let output = SteamStatsOutput {
            steam_name: "gabe".into(),
            game_time: 1.5,
            stats: vec![StatEntry {
                name: "kills".into(),
                value: "3".into(),
            }],
        };

        ops.cache_stats("42", "Half-Life 2", &output).await;

        assert_eq!(ops.get_cached_stats("42", "half-life 2").await, Some(output));
    }

    #[tokio::test]
    async fn undecodable_payload_is_a_miss() {
        let store = Arc::new(MemoryCache::new());
        store
            .set("games:42", "not json".into(), DEFAULT_CACHE_TTL)
            .await
            .unwrap();
        let ops = SteamCacheOperations::new(store, DEFAULT_CACHE_TTL);

        assert_eq!(ops.get_cached_games("42").await, None);
    }

    #[tokio::test]
    async fn backend_failures_are_swallowed() {
        let ops = SteamCacheOperations::new(Arc::new(BrokenStore), DEFAULT_CACHE_TTL);

        ops.cache_games("42", &[game(10, "Counter-Strike")]).await;
        assert_eq!(ops.get_cached_games("42").await, None);
    }
}
