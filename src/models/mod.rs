pub mod factory;
pub mod media;
pub mod search;
pub mod validation;

pub use factory::ContentFactory;
pub use media::{ContentKind, ContentRecord, Genre};
pub use search::{SearchCriteria, SearchCriteriaBuilder, SortMode};
pub use validation::{NumberValidator, StringValidator, ValidationError};
