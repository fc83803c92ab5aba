use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::{GamesResponse, UserStatsRequest};

#[axum::debug_handler]
pub async fn list_user_games(
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let games = state.steam.list_owned_games(&steam_id).await?;
    Ok(Json(GamesResponse { games }))
}

#[axum::debug_handler]
pub async fn get_user_stats(
    State(state): State<AppState>,
    payload: Result<Json<UserStatsRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // 请求体解析失败也返回 {"error": ...}
    let Json(req) = payload?;
    let output = state
        .steam
        .get_user_stats(&req.steam_id, &req.game_name)
        .await?;
    Ok(Json(output))
}
