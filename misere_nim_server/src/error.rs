use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use misere_nim_core::{EngineError, MoveError};
use tracing::{error, warn};

/// 把引擎错误和请求体解析错误转换为 HTTP 响应。调用方错误一律 400，
/// `NoLegalMove` 说明流程本身出了问题，返回 500 并记录错误日志。
#[derive(Debug)]
pub enum ApiError {
    Engine(EngineError),
    /// 请求体不是合法的 `{pile, remove}` 整数对
    BadBody(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err)
    }
}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        ApiError::Engine(EngineError::Move(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Engine(EngineError::Move(e)) => {
                warn!("拒绝走子: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Engine(e @ EngineError::NoLegalMove) => {
                error!("电脑被要求在空局面上走子: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::BadBody(detail) => {
                warn!("无法解析走子请求: {}", detail);
                (StatusCode::BAD_REQUEST, format!("Invalid move: {}", detail))
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
