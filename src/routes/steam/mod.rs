mod handler;
mod model;

pub use handler::{get_user_stats, list_user_games};
pub use model::{GamesResponse, UserStatsRequest};
