use axum::Json;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Steam Web API 调用失败
#[derive(Debug, Error)]
pub enum SteamError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{endpoint} returned malformed JSON: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// 缓存后端失败
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 业务层错误，每种情况单独区分
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to fetch owned games: {0}")]
    FetchFailed(#[source] SteamError),

    #[error("game not found in library: {0}")]
    GameNotFound(String),

    #[error("failed to fetch user information: {0}")]
    UpstreamUserInfoFailed(#[source] SteamError),

    #[error("failed to fetch game stats: {0}")]
    UpstreamStatsFailed(#[source] SteamError),
}

#[derive(Debug)]
pub enum AppError {
    /// 请求体不合法，状态码和说明沿用 axum 的拒绝信息
    InvalidRequest { status: StatusCode, message: String },
    FetchFailed,
    GameNotFound,
    UpstreamUserInfoFailed,
    UpstreamStatsFailed,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest { status, .. } => *status,
            AppError::GameNotFound => StatusCode::NOT_FOUND,
            AppError::FetchFailed
            | AppError::UpstreamUserInfoFailed
            | AppError::UpstreamStatsFailed => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidRequest { message, .. } => message,
            AppError::FetchFailed => "Failed to fetch games or no games found.",
            AppError::GameNotFound => "Game not found in user's library.",
            AppError::UpstreamUserInfoFailed => "Failed to fetch user information.",
            AppError::UpstreamStatsFailed => "Failed to fetch game stats.",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::FetchFailed(_) => AppError::FetchFailed,
            ServiceError::GameNotFound(_) => AppError::GameNotFound,
            ServiceError::UpstreamUserInfoFailed(_) => AppError::UpstreamUserInfoFailed,
            ServiceError::UpstreamStatsFailed(_) => AppError::UpstreamStatsFailed,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });

        (self.status(), body).into_response()
    }
}
