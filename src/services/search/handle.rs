// 查询句柄
//
// 每次提交生成一个句柄：唯一 ID、取消令牌、只能离开 Running 一次的状态，
// 以及一个最多写入一次的结果通道。

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::error::SearchError;
use crate::models::ContentRecord;

/// 查询 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QueryId(Uuid);

impl QueryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QueryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 调用方会话，同一会话同时最多只有一个运行中的查询
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 查询状态：Running → {Succeeded, Failed, Cancelled}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryState {
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl QueryState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, QueryState::Running)
    }
}

/// 成功查询的结果
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query_id: QueryId,
    pub items: Vec<ContentRecord>,
    pub total: usize,
    pub took_ms: u64,
}

/// 查询的终态结果，每个句柄只交付一次
#[derive(Debug)]
pub enum QueryOutcome {
    Succeeded(SearchResults),
    Failed(SearchError),
    /// 被新查询取代或被显式取消，不是错误
    Cancelled,
}

impl QueryOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, QueryOutcome::Cancelled)
    }

    pub fn state(&self) -> QueryState {
        match self {
            QueryOutcome::Succeeded(_) => QueryState::Succeeded,
            QueryOutcome::Failed(_) => QueryState::Failed,
            QueryOutcome::Cancelled => QueryState::Cancelled,
        }
    }
}

/// 执行器与句柄共享的查询记录
#[derive(Debug)]
pub(crate) struct QueryTicket {
    pub(crate) id: QueryId,
    pub(crate) session: SessionId,
    pub(crate) submitted_at: DateTime<Utc>,
    token: CancellationToken,
    state: Mutex<QueryState>,
}

impl QueryTicket {
    pub(crate) fn new(session: SessionId) -> Self {
        Self {
            id: QueryId::new(),
            session,
            submitted_at: Utc::now(),
            token: CancellationToken::new(),
            state: Mutex::new(QueryState::Running),
        }
    }

    pub(crate) fn state(&self) -> QueryState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 从 Running 转到终态；已是终态时返回 false
    pub(crate) fn try_finish(&self, next: QueryState) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.is_terminal() {
            return false;
        }
        *state = next;
        true
    }

    /// 取消查询。只有仍在运行时才会触发令牌，
    /// 因此令牌被触发就意味着结果永远不会交付。
    pub(crate) fn cancel(&self) -> bool {
        if self.try_finish(QueryState::Cancelled) {
            self.token.cancel();
            true
        } else {
            false
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub(crate) fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// 一次搜索的句柄
#[derive(Debug)]
pub struct QueryHandle {
    ticket: Arc<QueryTicket>,
    outcome_rx: oneshot::Receiver<QueryOutcome>,
}

impl QueryHandle {
    pub(crate) fn new(ticket: Arc<QueryTicket>, outcome_rx: oneshot::Receiver<QueryOutcome>) -> Self {
        Self { ticket, outcome_rx }
    }

    pub fn id(&self) -> QueryId {
        self.ticket.id
    }

    pub fn session(&self) -> &SessionId {
        &self.ticket.session
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.ticket.submitted_at
    }

    pub fn state(&self) -> QueryState {
        self.ticket.state()
    }

    pub(crate) fn ticket(&self) -> &Arc<QueryTicket> {
        &self.ticket
    }

    /// 等待终态结果
    pub async fn outcome(mut self) -> QueryOutcome {
        tokio::select! {
            biased;
            result = &mut self.outcome_rx => result.unwrap_or(QueryOutcome::Cancelled),
            _ = self.ticket.token().cancelled() => QueryOutcome::Cancelled,
        }
    }
}
