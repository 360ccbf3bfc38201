// 内容搜索服务
//
// 本模块负责在后台执行目录搜索：
// - 将搜索条件翻译为谓词并筛选仓库快照
// - 按所选排序方式对结果排序
// - 同一会话新查询提交时取消旧查询

pub mod error;
pub mod executor;
pub mod handle;
pub mod ranking;

pub use error::{ErrorKind, SearchError};
pub use executor::SearchExecutor;
pub use handle::{QueryHandle, QueryId, QueryOutcome, QueryState, SearchResults, SessionId};
