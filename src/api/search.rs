use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::error::{ApiError, ApiResult};
use super::response::{success, Page};
use crate::config::AppConfig;
use crate::models::{ContentKind, ContentRecord, Genre, SearchCriteria, SortMode};
use crate::services::search::{QueryId, QueryOutcome, SessionId};

/// 未指定会话时使用的会话名
pub const DEFAULT_SESSION: &str = "default";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub kind: Option<String>,
    pub genre: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub rating_min: Option<f32>,
    pub sort: Option<String>,
    pub session: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl SearchParams {
    /// 把查询参数翻译为搜索条件，无效输入在这里就被拒绝
    pub fn to_criteria(&self) -> Result<SearchCriteria, ApiError> {
        let mut builder = SearchCriteria::builder();

        if let Some(ref q) = self.q {
            builder = builder.keywords(q.as_str());
        }
        if let Some(ref kind) = self.kind {
            builder = builder.content_kind_str(kind.as_str());
        }
        if let Some(ref genre) = self.genre {
            builder = builder.genre_str(genre.as_str());
        }
        if let Some(year) = self.year_from {
            builder = builder.min_year(year);
        }
        if let Some(year) = self.year_to {
            builder = builder.max_year(year);
        }
        if let Some(rating) = self.rating_min {
            builder = builder.min_rating(rating);
        }

        Ok(builder.build()?)
    }

    pub fn sort_mode(&self) -> Result<SortMode, ApiError> {
        Ok(self.sort.as_deref().unwrap_or_default().parse::<SortMode>()?)
    }

    pub fn session(&self) -> SessionId {
        self.session
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SESSION)
            .into()
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<QueryId>,
    pub results: Vec<ContentRecord>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub sort: SortMode,
    pub took_ms: u64,
    /// 被同会话的新查询取代
    pub cancelled: bool,
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub kinds: Vec<ContentKind>,
    pub genres: Vec<&'static str>,
    pub sort_modes: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub session: SessionId,
    pub cancelled: bool,
}

/// 搜索目录
pub async fn search_content(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<impl IntoResponse> {
    let criteria = params.to_criteria()?;
    let sort = params.sort_mode()?;
    let session = params.session();
    let page = Page::new(
        params.page,
        params.limit,
        state.config.default_page_size,
        AppConfig::MAX_PAGE_SIZE,
    );

    let handle = state.executor.submit(criteria, sort, session);

    match handle.outcome().await {
        QueryOutcome::Succeeded(results) => Ok(success(SearchResponse {
            query_id: Some(results.query_id),
            total: results.total,
            results: page.slice(results.items),
            page: page.page,
            limit: page.limit,
            sort,
            took_ms: results.took_ms,
            cancelled: false,
        })),
        QueryOutcome::Failed(e) => Err(e.into()),
        // 新查询已经在运行，这里什么也不返回
        QueryOutcome::Cancelled => Ok(success(SearchResponse {
            query_id: None,
            results: Vec::new(),
            total: 0,
            page: page.page,
            limit: page.limit,
            sort,
            took_ms: 0,
            cancelled: true,
        })),
    }
}

/// 取消会话中正在运行的查询
pub async fn cancel_search(
    State(state): State<AppState>,
    Path(session): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = SessionId::from(session);
    let cancelled = state.executor.cancel_session(&session);
    Ok(success(CancelResponse { session, cancelled }))
}

/// 获取可用的筛选选项
pub async fn get_filter_options() -> ApiResult<impl IntoResponse> {
    Ok(success(FilterOptions {
        kinds: ContentKind::ALL.to_vec(),
        genres: Genre::ALL.iter().map(|g| g.display_name()).collect(),
        sort_modes: SortMode::ALL.iter().map(|m| m.as_str()).collect(),
    }))
}
