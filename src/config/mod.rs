use std::env;
use std::fmt;
use std::time::Duration;

use crate::cache::memory::DEFAULT_MAX_ENTRIES;
use crate::cache::operations::steam::DEFAULT_CACHE_TTL;

const DEFAULT_STEAM_API_BASE_URL: &str = "https://api.steampowered.com";

#[derive(Clone, serde::Deserialize)]
pub struct Config {
    pub steam_api_key: String,
    pub steam_api_base_url: String,
    pub steam_request_timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub cache_max_entries: u64,
    pub redis_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name))
    }

    /// 按变量名取值构造配置，缺省值和 `from_env` 一致
    pub fn from_lookup<F>(var: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Config {
            steam_api_key: var("STEAM_API_KEY")?,
            steam_api_base_url: var("STEAM_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_STEAM_API_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            steam_request_timeout_secs: var("STEAM_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            cache_ttl_secs: var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL.as_secs()),
            cache_max_entries: var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            redis_url: var("REDIS_URL").ok().filter(|url| !url.trim().is_empty()),
            server_host: var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            api_base_uri: var("API_BASE_URI").unwrap_or_else(|_| "/api/steam".into()),
        })
    }

    pub fn steam_request_timeout(&self) -> Duration {
        Duration::from_secs(self.steam_request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

// API key 不能出现在日志里
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("steam_api_key", &"***")
            .field("steam_api_base_url", &self.steam_api_base_url)
            .field("steam_request_timeout_secs", &self.steam_request_timeout_secs)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("cache_max_entries", &self.cache_max_entries)
            .field("redis_url", &self.redis_url.as_ref().map(|_| "***"))
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("api_base_uri", &self.api_base_uri)
            .finish()
    }
}
