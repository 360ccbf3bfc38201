pub mod error;
pub mod health;
pub mod response;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::database::ContentRepository;
use crate::services::search::SearchExecutor;

#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<SearchExecutor>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn ContentRepository>, config: AppConfig) -> Self {
        Self {
            executor: Arc::new(SearchExecutor::new(repository)),
            config,
        }
    }
}

/// 构建路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Media Catalog API v1.0" }))
        .route("/api/health", get(health::health_check))
        // Search
        .route("/api/search", get(search::search_content))
        .route("/api/search/filters", get(search::get_filter_options))
        .route("/api/search/cancel/:session", post(search::cancel_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
