use serde::{Deserialize, Serialize};

use crate::steam::OwnedGame;

#[derive(Debug, Deserialize)]
pub struct UserStatsRequest {
    pub steam_id: String,
    pub game_name: String,
}

#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub games: Vec<OwnedGame>,
}
