/// 缓存键模块
/// 提供各种缓存键生成函数

// Steam 缓存键模块
pub mod steam_keys;

// 重新导出常用的键生成函数
pub use steam_keys::{games_key, normalize_game_name, stats_key};
