use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheStore, SteamCacheOperations};
use crate::cache::keys::normalize_game_name;
use crate::error::ServiceError;

use super::SteamApi;
use super::models::{OwnedGame, SteamStatsOutput};
use super::normalize::normalize;

/// 编排上游调用和缓存读写
///
/// 上游客户端和缓存后端都在构造时注入。
#[derive(Clone)]
pub struct SteamService {
    api: Arc<dyn SteamApi>,
    cache: SteamCacheOperations,
}

impl SteamService {
    pub fn new(api: Arc<dyn SteamApi>, store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            api,
            cache: SteamCacheOperations::new(store, ttl),
        }
    }

    /// 获取用户的游戏列表，优先读缓存
    pub async fn list_owned_games(&self, steam_id: &str) -> Result<Vec<OwnedGame>, ServiceError> {
        if let Some(games) = self.cache.get_cached_games(steam_id).await {
            return Ok(games);
        }

        let games = self.api.fetch_owned_games(steam_id).await.map_err(|e| {
            tracing::error!(steam_id, error = %e, "failed to fetch owned games");
            ServiceError::FetchFailed(e)
        })?;

        tracing::info!(steam_id, count = games.len(), "fetched owned games");
        self.cache.cache_games(steam_id, &games).await;

        Ok(games)
    }

    /// 按游戏名获取用户在该游戏里的统计数据
    pub async fn get_user_stats(
        &self,
        steam_id: &str,
        game_name: &str,
    ) -> Result<SteamStatsOutput, ServiceError> {
        let games = self.list_owned_games(steam_id).await?;

        let Some(game) = find_game(&games, game_name) else {
            tracing::info!(steam_id, game_name, "game not found in library");
            return Err(ServiceError::GameNotFound(game_name.to_string()));
        };
        let app_id = game.app_id;

        if let Some(output) = self.cache.get_cached_stats(steam_id, game_name).await {
            return Ok(output);
        }

        // 两个请求互不依赖，并发发出
        let (profile, raw_stats) = tokio::join!(
            self.api.fetch_player_summary(steam_id),
            self.api.fetch_game_stats(steam_id, app_id),
        );

        let mut profile = profile.map_err(|e| {
            tracing::error!(steam_id, error = %e, "failed to fetch player summary");
            ServiceError::UpstreamUserInfoFailed(e)
        })?;
        let raw_stats = raw_stats.map_err(|e| {
            tracing::error!(steam_id, app_id, error = %e, "failed to fetch game stats");
            ServiceError::UpstreamStatsFailed(e)
        })?;

        // 玩家资料里通常没有单款游戏的时长，用游戏列表里的数据补上
        if profile.playtime_forever_minutes.is_none() {
            profile.playtime_forever_minutes = Some(game.playtime_forever);
        }

        let output = normalize(&profile, raw_stats);
        self.cache.cache_stats(steam_id, game_name, &output).await;

        Ok(output)
    }
}

/// 在游戏列表里按名字查找，不区分大小写，要求完全一致
pub fn find_game<'a>(games: &'a [OwnedGame], game_name: &str) -> Option<&'a OwnedGame> {
    let wanted = normalize_game_name(game_name);
    games
        .iter()
        .find(|game| normalize_game_name(&game.name) == wanted)
}
