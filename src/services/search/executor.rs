// 查询执行器
//
// 每个查询在独立的 tokio 任务中执行，调用方不会被阻塞。
// 同一会话同时只允许一个运行中的查询：新查询提交时会取消旧查询。
//
// 结果交付与取消都在会话表的锁内完成，所以被取代的查询
// 不可能在新查询被接受之后再交付结果。

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use tokio::sync::oneshot;
use tracing::{debug, error, info};

use super::handle::{QueryHandle, QueryOutcome, QueryState, QueryTicket, SearchResults, SessionId};
use super::ranking::rank;
use crate::database::{ContentPredicate, ContentRepository};
use crate::models::{ContentRecord, SearchCriteria, SortMode};

type SessionTable = Arc<Mutex<HashMap<SessionId, Arc<QueryTicket>>>>;

/// 搜索执行器
#[derive(Clone)]
pub struct SearchExecutor {
    repository: Arc<dyn ContentRepository>,
    sessions: SessionTable,
}

impl SearchExecutor {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            repository,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// 提交查询
    ///
    /// 同会话中仍在运行的查询会被取消，然后立即启动新查询。
    /// 必须在 tokio 运行时内调用。
    pub fn submit(
        &self,
        criteria: SearchCriteria,
        sort: SortMode,
        session: impl Into<SessionId>,
    ) -> QueryHandle {
        let ticket = Arc::new(QueryTicket::new(session.into()));
        let (outcome_tx, outcome_rx) = oneshot::channel();

        {
            let mut sessions = lock_sessions(&self.sessions);
            if let Some(previous) = sessions.insert(ticket.session.clone(), Arc::clone(&ticket)) {
                if previous.cancel() {
                    debug!(
                        "查询 {} 被 {} 取代 (session={})",
                        previous.id, ticket.id, ticket.session
                    );
                }
            }
        }

        info!(
            "提交查询: id={}, session={}, sort={}",
            ticket.id, ticket.session, sort
        );

        let worker = QueryWorker {
            repository: Arc::clone(&self.repository),
            sessions: Arc::clone(&self.sessions),
            ticket: Arc::clone(&ticket),
            criteria,
            sort,
        };
        tokio::spawn(worker.run(outcome_tx));

        QueryHandle::new(ticket, outcome_rx)
    }

    /// 显式取消查询，已是终态时什么也不做
    pub fn cancel(&self, handle: &QueryHandle) -> bool {
        let mut sessions = lock_sessions(&self.sessions);
        let ticket = handle.ticket();
        if sessions
            .get(&ticket.session)
            .map_or(false, |current| current.id == ticket.id)
        {
            sessions.remove(&ticket.session);
        }

        let cancelled = ticket.cancel();
        if cancelled {
            debug!("查询 {} 已取消 (session={})", ticket.id, ticket.session);
        }
        cancelled
    }

    /// 取消会话中正在运行的查询
    pub fn cancel_session(&self, session: &SessionId) -> bool {
        let mut sessions = lock_sessions(&self.sessions);
        match sessions.remove(session) {
            Some(ticket) => ticket.cancel(),
            None => false,
        }
    }

    /// 当前有运行中查询的会话数
    pub fn active_queries(&self) -> usize {
        lock_sessions(&self.sessions)
            .values()
            .filter(|ticket| ticket.state() == QueryState::Running)
            .count()
    }

    pub fn repository(&self) -> &Arc<dyn ContentRepository> {
        &self.repository
    }
}

/// 会话表里的数据始终一致，锁中毒时直接取回
fn lock_sessions(sessions: &SessionTable) -> MutexGuard<'_, HashMap<SessionId, Arc<QueryTicket>>> {
    sessions.lock().unwrap_or_else(|e| e.into_inner())
}

/// 单个查询的后台任务
struct QueryWorker {
    repository: Arc<dyn ContentRepository>,
    sessions: SessionTable,
    ticket: Arc<QueryTicket>,
    criteria: SearchCriteria,
    sort: SortMode,
}

impl QueryWorker {
    async fn run(self, outcome_tx: oneshot::Sender<QueryOutcome>) {
        let started = Instant::now();

        // 1. 读取仓库快照（唯一的挂起点）
        let snapshot = tokio::select! {
            _ = self.ticket.token().cancelled() => {
                debug!("查询 {} 在读取快照时被取消", self.ticket.id);
                return;
            }
            result = self.repository.all_content() => result,
        };

        let snapshot = match snapshot {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("查询 {} 读取内容仓库失败: {}", self.ticket.id, e);
                self.deliver(QueryState::Failed, QueryOutcome::Failed(e), outcome_tx);
                return;
            }
        };

        // 2. 筛选 + 去重
        let mut items = filter_snapshot(&snapshot, &ContentPredicate::from_criteria(&self.criteria));

        if self.ticket.is_cancelled() {
            debug!("查询 {} 在筛选后被取消", self.ticket.id);
            return;
        }

        // 3. 排序
        rank(&mut items, self.sort);

        let total = items.len();
        let took_ms = started.elapsed().as_millis() as u64;
        debug!(
            "查询 {} 完成: 快照 {} 条, 命中 {} 条, 耗时 {}ms",
            self.ticket.id,
            snapshot.len(),
            total,
            took_ms
        );

        let results = SearchResults {
            query_id: self.ticket.id,
            items,
            total,
            took_ms,
        };
        self.deliver(QueryState::Succeeded, QueryOutcome::Succeeded(results), outcome_tx);
    }

    /// 在会话表锁内完成状态转换并交付结果
    fn deliver(&self, state: QueryState, outcome: QueryOutcome, outcome_tx: oneshot::Sender<QueryOutcome>) {
        let mut sessions = lock_sessions(&self.sessions);

        // 排序之后的最后一次取消检查
        if !self.ticket.try_finish(state) {
            debug!("查询 {} 在交付前被取消", self.ticket.id);
            return;
        }

        if sessions
            .get(&self.ticket.session)
            .map_or(false, |current| current.id == self.ticket.id)
        {
            sessions.remove(&self.ticket.session);
        }

        // 调用方可能已经丢弃了句柄
        let _ = outcome_tx.send(outcome);
    }
}

/// 按谓词筛选快照，同一 ID 只保留第一次出现的记录
fn filter_snapshot(snapshot: &[ContentRecord], predicate: &ContentPredicate) -> Vec<ContentRecord> {
    let mut seen = HashSet::new();
    snapshot
        .iter()
        .filter(|record| predicate.matches(record))
        .filter(|record| seen.insert(record.id.clone()))
        .cloned()
        .collect()
}
