use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use steam_stats_backend::cache::MemoryCache;
use steam_stats_backend::config::Config;
use steam_stats_backend::error::SteamError;
use steam_stats_backend::steam::{OwnedGame, RawStat, SteamApi, SteamService, UserProfile};
use steam_stats_backend::{AppState, build_router};

#[derive(Default)]
struct FakeSteam {
    fail_games: bool,
    fail_stats: bool,
}

fn upstream_error(endpoint: &'static str) -> SteamError {
    SteamError::Status {
        endpoint,
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[async_trait]
impl SteamApi for FakeSteam {
    async fn fetch_owned_games(&self, _steam_id: &str) -> Result<Vec<OwnedGame>, SteamError> {
        if self.fail_games {
            return Err(upstream_error("GetOwnedGames"));
        }
        Ok(serde_json::from_value(json!([
            {"appid": 10, "name": "Counter-Strike", "playtime_forever": 120}
        ]))
        .unwrap())
    }

    async fn fetch_player_summary(&self, _steam_id: &str) -> Result<UserProfile, SteamError> {
        Ok(UserProfile {
            persona_name: Some("gabe".into()),
            playtime_forever_minutes: None,
        })
    }

    async fn fetch_game_stats(
        &self,
        _steam_id: &str,
        _app_id: u64,
    ) -> Result<Vec<RawStat>, SteamError> {
        if self.fail_stats {
            return Err(upstream_error("GetUserStatsForGame"));
        }
        Ok(serde_json::from_value(json!([
            {"name": "total_kills", "value": 42},
            {"name": "total_wins", "value": 3}
        ]))
        .unwrap())
    }
}

fn test_config(api_base_uri: &str) -> Config {
    Config {
        steam_api_key: "unused".into(),
        steam_api_base_url: "http://127.0.0.1:1".into(),
        steam_request_timeout_secs: 1,
        cache_ttl_secs: 3600,
        cache_max_entries: 1000,
        redis_url: None,
        server_host: "127.0.0.1".into(),
        server_port: 0,
        api_base_uri: api_base_uri.into(),
    }
}

async fn start_server(app: Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

async fn spawn_app_with(fake: FakeSteam, api_base_uri: &str) -> String {
    let config = test_config(api_base_uri);
    let steam = SteamService::new(
        Arc::new(fake),
        Arc::new(MemoryCache::new()),
        Duration::from_secs(config.cache_ttl_secs),
    );
    let (addr, _handle) = start_server(build_router(AppState { config, steam })).await;
    format!("http://{}", addr)
}

async fn spawn_app(fake: FakeSteam) -> String {
    spawn_app_with(fake, "/api/steam").await
}

async fn get(url: String) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap_or(Value::Null))
}

async fn post_json(url: String, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_list_games_returns_library() {
    let base = spawn_app(FakeSteam::default()).await;

    let (status, body) = get(format!("{}/api/steam/games/76561198000000000", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"games": [{"appid": 10, "name": "Counter-Strike", "playtime_forever": 120}]})
    );
}

#[tokio::test]
async fn test_list_games_failure_returns_error_body() {
    let base = spawn_app(FakeSteam {
        fail_games: true,
        ..Default::default()
    })
    .await;

    let (status, body) = get(format!("{}/api/steam/games/76561198000000000", base)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "Failed to fetch games or no games found."}));
}

#[tokio::test]
async fn test_user_stats_returns_composed_result() {
    let base = spawn_app(FakeSteam::default()).await;

    let (status, body) = post_json(
        format!("{}/api/steam/user-stats", base),
        json!({"steam_id": "76561198000000000", "game_name": "counter-strike"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "steam_name": "gabe",
            "game_time": 2.0,
            "stats": [
                {"name": "total_kills", "value": "42"},
                {"name": "total_wins", "value": "3"}
            ]
        })
    );
}

#[tokio::test]
async fn test_user_stats_unknown_game_is_404() {
    let base = spawn_app(FakeSteam::default()).await;

    let (status, body) = post_json(
        format!("{}/api/steam/user-stats", base),
        json!({"steam_id": "76561198000000000", "game_name": "Dota 2"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Game not found in user's library."}));
}

#[tokio::test]
async fn test_user_stats_upstream_failure_is_502() {
    let base = spawn_app(FakeSteam {
        fail_stats: true,
        ..Default::default()
    })
    .await;

    let (status, body) = post_json(
        format!("{}/api/steam/user-stats", base),
        json!({"steam_id": "76561198000000000", "game_name": "Counter-Strike"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "Failed to fetch game stats."}));
}

#[tokio::test]
async fn test_user_stats_missing_field_returns_json_error() {
    let base = spawn_app(FakeSteam::default()).await;

    let (status, body) = post_json(
        format!("{}/api/steam/user-stats", base),
        json!({"steam_id": "76561198000000000"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = body["error"].as_str().expect("error body should be JSON");
    assert!(error.contains("game_name"), "unexpected error: {}", error);
}

#[tokio::test]
async fn test_user_stats_non_json_body_returns_json_error() {
    let base = spawn_app(FakeSteam::default()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/steam/user-stats", base))
        .body("steam_id=1&game_name=Portal")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app(FakeSteam::default()).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_routes_can_be_mounted_at_root() {
    let base = spawn_app_with(FakeSteam::default(), "/").await;

    let (status, body) = get(format!("{}/games/76561198000000000", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["games"][0]["appid"], 10);
}
