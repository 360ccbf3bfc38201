use crate::models::{ContentKind, ContentRecord, Genre, SearchCriteria};

/// 单个筛选子句
///
/// 每个子句都是纯函数，可以单独求值；子句之间是 AND 关系。
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateClause {
    Kind(ContentKind),
    Genre(Genre),
    MinYear(i32),
    MaxYear(i32),
    MinRating(f32),
    /// 已小写化的关键词
    Keyword(String),
}

impl PredicateClause {
    pub fn matches(&self, record: &ContentRecord) -> bool {
        match self {
            PredicateClause::Kind(kind) => record.kind == *kind,
            PredicateClause::Genre(genre) => record.has_genre(*genre),
            // 未知年份不满足任何年份边界
            PredicateClause::MinYear(min) => record.year.map_or(false, |y| y >= *min),
            PredicateClause::MaxYear(max) => record.year.map_or(false, |y| y <= *max),
            PredicateClause::MinRating(min) => record.rating.map_or(false, |r| r >= *min),
            PredicateClause::Keyword(keyword) => keyword_matches(keyword, record),
        }
    }
}

/// 关键词匹配：标题、类型显示名、导演/主创，小写子串匹配
fn keyword_matches(keyword: &str, record: &ContentRecord) -> bool {
    if record.title.to_lowercase().contains(keyword) {
        return true;
    }

    if record
        .genres
        .iter()
        .any(|g| g.display_name().to_lowercase().contains(keyword))
    {
        return true;
    }

    record
        .creator
        .as_ref()
        .map_or(false, |c| c.to_lowercase().contains(keyword))
}

/// 由搜索条件组合出的谓词
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentPredicate {
    clauses: Vec<PredicateClause>,
}

impl ContentPredicate {
    /// 从搜索条件构建谓词，不会失败（条件在构建时已验证）
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        ContentQueryBuilder::new().with_criteria(criteria).build()
    }

    pub fn matches(&self, record: &ContentRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }

    pub fn clauses(&self) -> &[PredicateClause] {
        &self.clauses
    }

    /// 没有子句时匹配一切
    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// 动态谓词构建器
///
/// 子句顺序：类型 → 分类 → 年份 → 评分 → 关键词，
/// 便宜的检查在前，顺序不影响结果。
pub struct ContentQueryBuilder {
    clauses: Vec<PredicateClause>,
}

impl ContentQueryBuilder {
    pub fn new() -> Self {
        Self { clauses: Vec::new() }
    }

    pub fn with_criteria(mut self, criteria: &SearchCriteria) -> Self {
        // 内容类型过滤
        if let Some(kind) = criteria.content_kind() {
            self.clauses.push(PredicateClause::Kind(kind));
        }

        // 分类过滤
        if let Some(genre) = criteria.genre() {
            self.clauses.push(PredicateClause::Genre(genre));
        }

        // 年份范围过滤，上下界各自独立
        if let Some(min_year) = criteria.min_year() {
            self.clauses.push(PredicateClause::MinYear(min_year));
        }
        if let Some(max_year) = criteria.max_year() {
            self.clauses.push(PredicateClause::MaxYear(max_year));
        }

        // 最低评分
        if let Some(min_rating) = criteria.min_rating() {
            self.clauses.push(PredicateClause::MinRating(min_rating));
        }

        // 文本搜索放最后，开销最大
        if let Some(keywords) = criteria.keywords() {
            self.clauses.push(PredicateClause::Keyword(keywords.to_lowercase()));
        }

        self
    }

    pub fn build(self) -> ContentPredicate {
        ContentPredicate { clauses: self.clauses }
    }
}

impl Default for ContentQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
