// 搜索模块错误类型定义

use serde::Serialize;
use thiserror::Error;

use crate::models::ValidationError;

/// 搜索引擎的统一错误类型
///
/// 取消不是错误，由 `QueryOutcome::Cancelled` 表示。
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// 查询条件无效，在构建条件时同步返回，不会进入执行器
    #[error("无效的查询条件: {0}")]
    InvalidCriteria(#[from] ValidationError),

    /// 读取仓库快照失败
    #[error("内容仓库不可用: {0}")]
    RepositoryUnavailable(String),
}

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidCriteria,
    RepositoryUnavailable,
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::InvalidCriteria(_) => ErrorKind::InvalidCriteria,
            SearchError::RepositoryUnavailable(_) => ErrorKind::RepositoryUnavailable,
        }
    }
}
