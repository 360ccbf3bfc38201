pub mod query_builder;
pub mod repository;

pub use query_builder::{ContentPredicate, ContentQueryBuilder, PredicateClause};
pub use repository::{ContentRepository, MemoryRepository};
