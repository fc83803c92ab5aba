use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use config::Config;
use middleware::log_errors;
use steam::SteamService;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod steam;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub steam: SteamService,
}

/// 组装全部路由，Steam 接口挂在 `config.api_base_uri` 下面
pub fn build_router(state: AppState) -> Router {
    let steam_routes = Router::new()
        .route("/games/{steam_id}", get(routes::steam::list_user_games))
        .route("/user-stats", post(routes::steam::get_user_stats));

    // axum 不允许在根路径上 nest
    let base = state.config.api_base_uri.trim_end_matches('/');
    let router = if base.is_empty() {
        Router::new().merge(steam_routes)
    } else if base.starts_with('/') {
        Router::new().nest(base, steam_routes)
    } else {
        Router::new().nest(&format!("/{}", base), steam_routes)
    };

    let router = router
        .route("/health", get(|| async { "OK" }))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(log_errors)),
        );

    // 开发模式下允许所有来源跨域
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}
