use axum::{
    extract::State,
    response::IntoResponse,
};
use serde_json::json;

use super::AppState;
use super::error::{ApiError, ApiResult};
use super::response::success;

/// 健康检查端点
pub async fn health_check(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    // 检查内容仓库是否可读
    let content_count = state.executor.repository().content_count().await
        .map_err(|e| {
            tracing::error!("Health check failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(success(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "content_count": content_count,
        "active_queries": state.executor.active_queries(),
    })))
}
