use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use steam_stats_backend::{
    AppState, build_router,
    cache::{CacheStore, MemoryCache, RedisCache},
    config::Config,
    steam::{SteamClient, SteamService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration, is STEAM_API_KEY set?");
    tracing::debug!(?config, "Configuration loaded");

    // 设置 Steam 客户端
    let client = SteamClient::from_config(&config).expect("Failed to build Steam HTTP client");

    // 设置缓存后端，配置了 REDIS_URL 就用 Redis
    let store: Arc<dyn CacheStore> = match &config.redis_url {
        Some(url) => {
            tracing::info!("Using Redis cache backend");
            Arc::new(
                RedisCache::connect(url)
                    .await
                    .expect("Failed to connect to Redis"),
            )
        }
        None => {
            tracing::info!("Using in-memory cache backend");
            Arc::new(MemoryCache::with_max_entries(config.cache_max_entries))
        }
    };

    // 设置应用状态
    let state = AppState {
        steam: SteamService::new(Arc::new(client), store, config.cache_ttl()),
        config: config.clone(),
    };

    let app = build_router(state);

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
