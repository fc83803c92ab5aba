// Steam Web API 相关：上游客户端、数据模型、结果整理和业务编排

pub mod client;
pub mod models;
pub mod normalize;
pub mod service;

use async_trait::async_trait;

use crate::error::SteamError;

pub use client::SteamClient;
pub use models::{OwnedGame, RawStat, StatEntry, SteamStatsOutput, UserProfile};
pub use normalize::normalize;
pub use service::SteamService;

/// 上游接口抽象，测试里可以替换成假的实现
#[async_trait]
pub trait SteamApi: Send + Sync {
    async fn fetch_owned_games(&self, steam_id: &str) -> Result<Vec<OwnedGame>, SteamError>;

    async fn fetch_player_summary(&self, steam_id: &str) -> Result<UserProfile, SteamError>;

    async fn fetch_game_stats(&self, steam_id: &str, app_id: u64)
    -> Result<Vec<RawStat>, SteamError>;
}
