use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::models::ContentRecord;
use crate::services::search::SearchError;

/// 内容仓库接口
///
/// 搜索引擎只调用 `all_content` 读取快照，从不写入。
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// 返回当前内容的一致快照（长度在遍历过程中不会改变）
    async fn all_content(&self) -> Result<Arc<Vec<ContentRecord>>, SearchError>;

    async fn content_count(&self) -> Result<usize, SearchError> {
        Ok(self.all_content().await?.len())
    }
}

/// 内存仓库实现
///
/// 快照以 `Arc<Vec<_>>` 共享，写入时整体替换（写时复制），
/// 正在执行的查询继续持有旧快照。
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    snapshot: Arc<RwLock<Arc<Vec<ContentRecord>>>>,
}

impl MemoryRepository {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(records))),
        }
    }

    /// 整体替换目录内容
    pub fn replace_all(&self, records: Vec<ContentRecord>) -> Result<(), SearchError> {
        let mut guard = self.snapshot.write().map_err(|_| poisoned())?;
        *guard = Arc::new(records);
        Ok(())
    }

    /// 追加一条记录
    pub fn insert(&self, record: ContentRecord) -> Result<(), SearchError> {
        let mut guard = self.snapshot.write().map_err(|_| poisoned())?;
        let mut records = guard.as_ref().clone();
        records.push(record);
        *guard = Arc::new(records);
        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<ContentRecord>, SearchError> {
        let guard = self.snapshot.read().map_err(|_| poisoned())?;
        Ok(guard.iter().find(|r| r.id == id).cloned())
    }
}

fn poisoned() -> SearchError {
    SearchError::RepositoryUnavailable("repository lock poisoned".to_string())
}

#[async_trait]
impl ContentRepository for MemoryRepository {
    async fn all_content(&self) -> Result<Arc<Vec<ContentRecord>>, SearchError> {
        let guard = self.snapshot.read().map_err(|_| poisoned())?;
        Ok(Arc::clone(&guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentFactory, ContentKind};

    #[tokio::test]
    async fn test_snapshot_is_stable_across_writes() {
        let repo = MemoryRepository::new(ContentFactory::sample_catalog().unwrap());
        let before = repo.all_content().await.unwrap();

        repo.insert(ContentRecord::new("Late Addition", ContentKind::Movie).unwrap())
            .unwrap();

        let after = repo.all_content().await.unwrap();
        assert_eq!(before.len() + 1, after.len());
        // 旧快照不受影响
        assert!(before.iter().all(|r| r.title != "Late Addition"));
    }

    #[tokio::test]
    async fn test_replace_all_and_lookup() {
        let repo = MemoryRepository::default();
        assert_eq!(repo.content_count().await.unwrap(), 0);

        repo.replace_all(ContentFactory::sample_catalog().unwrap()).unwrap();
        assert_eq!(repo.content_count().await.unwrap(), 12);
        assert_eq!(repo.get_by_id("m-002").unwrap().unwrap().title, "Dune: Part Two");
        assert!(repo.get_by_id("missing").unwrap().is_none());
    }
}
