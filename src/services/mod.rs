pub mod search;

pub use search::{QueryHandle, QueryOutcome, SearchError, SearchExecutor};
