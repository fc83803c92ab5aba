// 缓存模块
// 包含缓存后端、缓存键和缓存操作逻辑

pub mod keys;
pub mod memory;
pub mod operations;
pub mod redis_store;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheError;

// 重新导出常用类型，方便其他模块使用
pub use memory::MemoryCache;
pub use operations::SteamCacheOperations;
pub use redis_store::RedisCache;

/// 带过期时间的键值存储
///
/// 值统一是 JSON 字符串。过期的条目和不存在的条目对调用方来说没有区别，
/// `set` 会无条件覆盖同一个键上的旧值。
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;
}
