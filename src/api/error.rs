use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::models::ValidationError;
use crate::services::search::SearchError;

/// 统一的API错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 请求参数错误（包括无效的搜索条件）
    BadRequest(String),
    /// 内容仓库不可用
    ServiceUnavailable(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// 条件构建失败直接作为请求错误返回
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidCriteria(e) => ApiError::BadRequest(e.to_string()),
            SearchError::RepositoryUnavailable(msg) => ApiError::ServiceUnavailable(msg),
        }
    }
}

/// 实现IntoResponse，将错误转换为HTTP响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            ApiError::ServiceUnavailable(ref msg) => {
                tracing::error!("Repository unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "repository_unavailable",
                    "The content catalog is currently unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ApiError::BadRequest("Invalid genre: Telenovela".to_string());
        assert_eq!(error.to_string(), "Bad request: Invalid genre: Telenovela");
    }

    #[test]
    fn test_search_error_conversion() {
        let api_error: ApiError = SearchError::RepositoryUnavailable("offline".into()).into();
        assert!(matches!(api_error, ApiError::ServiceUnavailable(_)));

        let api_error: ApiError = ValidationError::InvalidGenre("Telenovela".into()).into();
        assert!(matches!(api_error, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ServiceUnavailable("x".into()).into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
