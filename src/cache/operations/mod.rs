/// 缓存操作
/// 提供缓存操作的功能实现

// Steam 数据缓存操作
pub mod steam;

// 重新导出常用操作
pub use steam::SteamCacheOperations;
