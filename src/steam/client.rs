use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::SteamError;

use super::SteamApi;
use super::models::{
    OwnedGame, OwnedGamesEnvelope, PlayerSummariesEnvelope, RawStat, UserProfile,
    UserStatsEnvelope,
};

const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v0001/";
const PLAYER_SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v0002/";
const USER_STATS_PATH: &str = "/ISteamUserStats/GetUserStatsForGame/v0002/";

/// 基于 reqwest 的 Steam Web API 客户端，不做重试
#[derive(Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SteamClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.steam_api_key.clone(),
            config.steam_api_base_url.clone(),
            config.steam_request_timeout(),
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, SteamError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(endpoint, "calling Steam Web API");

        // reqwest 的错误信息里带完整 URL（含 key），这里统一去掉
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("format", "json")])
            .query(params)
            .send()
            .await
            .map_err(|e| SteamError::Transport {
                endpoint,
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SteamError::Status { endpoint, status });
        }

        let body = response.bytes().await.map_err(|e| SteamError::Transport {
            endpoint,
            source: e.without_url(),
        })?;

        serde_json::from_slice(&body).map_err(|source| SteamError::Decode { endpoint, source })
    }
}

#[async_trait]
impl SteamApi for SteamClient {
    async fn fetch_owned_games(&self, steam_id: &str) -> Result<Vec<OwnedGame>, SteamError> {
        let envelope: OwnedGamesEnvelope = self
            .get_json(
                "GetOwnedGames",
                OWNED_GAMES_PATH,
                &[
                    ("steamid", steam_id),
                    ("include_appinfo", "true"),
                    ("include_played_free_games", "true"),
                ],
            )
            .await?;

        Ok(envelope.response.games)
    }

    async fn fetch_player_summary(&self, steam_id: &str) -> Result<UserProfile, SteamError> {
        let envelope: PlayerSummariesEnvelope = self
            .get_json(
                "GetPlayerSummaries",
                PLAYER_SUMMARIES_PATH,
                &[("steamids", steam_id)],
            )
            .await?;

        Ok(envelope.into_profile())
    }

    async fn fetch_game_stats(
        &self,
        steam_id: &str,
        app_id: u64,
    ) -> Result<Vec<RawStat>, SteamError> {
        let app_id = app_id.to_string();
        let envelope: UserStatsEnvelope = self
            .get_json(
                "GetUserStatsForGame",
                USER_STATS_PATH,
                &[("steamid", steam_id), ("appid", app_id.as_str())],
            )
            .await?;

        Ok(envelope.playerstats.stats)
    }
}

impl fmt::Debug for SteamClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}
