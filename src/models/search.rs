use serde::{Deserialize, Serialize};

use super::validation::{NumberValidator, ValidationError};
use super::{ContentKind, Genre};

/// 搜索条件
///
/// 构建后不可变：只暴露 getter，查询执行期间条件不会被修改。
/// 通过 [`SearchCriteriaBuilder`] 创建。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchCriteria {
    content_kind: Option<ContentKind>,
    keywords: Option<String>,
    genre: Option<Genre>,
    min_year: Option<i32>,
    max_year: Option<i32>,
    min_rating: Option<f32>,
}

impl SearchCriteria {
    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::default()
    }

    pub fn content_kind(&self) -> Option<ContentKind> {
        self.content_kind
    }

    /// 已去除首尾空白并转为小写的关键词
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    pub fn genre(&self) -> Option<Genre> {
        self.genre
    }

    pub fn min_year(&self) -> Option<i32> {
        self.min_year
    }

    pub fn max_year(&self) -> Option<i32> {
        self.max_year
    }

    pub fn min_rating(&self) -> Option<f32> {
        self.min_rating
    }

    /// 没有任何筛选字段
    pub fn is_empty(&self) -> bool {
        self.content_kind.is_none()
            && self.keywords.is_none()
            && self.genre.is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
            && self.min_rating.is_none()
    }
}

/// 搜索条件构建器
///
/// 类型化的 setter 直接接收枚举；`*_str` 版本接收外部输入的字符串，
/// 解析失败的错误会推迟到 `build()` 时返回。
#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    content_kind: Option<ContentKind>,
    content_kind_raw: Option<String>,
    keywords: Option<String>,
    genre: Option<Genre>,
    genre_raw: Option<String>,
    min_year: Option<i32>,
    max_year: Option<i32>,
    min_rating: Option<f32>,
}

impl SearchCriteriaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_kind(mut self, kind: ContentKind) -> Self {
        self.content_kind = Some(kind);
        self.content_kind_raw = None;
        self
    }

    pub fn content_kind_str(mut self, kind: impl Into<String>) -> Self {
        self.content_kind = None;
        self.content_kind_raw = Some(kind.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self.genre_raw = None;
        self
    }

    pub fn genre_str(mut self, genre: impl Into<String>) -> Self {
        self.genre = None;
        self.genre_raw = Some(genre.into());
        self
    }

    pub fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    pub fn max_year(mut self, year: i32) -> Self {
        self.max_year = Some(year);
        self
    }

    /// 闭区间年份范围。不检查 min <= max，反向区间会得到空结果。
    pub fn year_range(self, min_year: i32, max_year: i32) -> Self {
        self.min_year(min_year).max_year(max_year)
    }

    pub fn min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn build(self) -> Result<SearchCriteria, ValidationError> {
        let content_kind = match self.content_kind_raw {
            Some(raw) if !raw.trim().is_empty() => Some(raw.parse::<ContentKind>()?),
            _ => self.content_kind,
        };

        let genre = match self.genre_raw {
            Some(raw) if !raw.trim().is_empty() => Some(raw.parse::<Genre>()?),
            _ => self.genre,
        };

        NumberValidator::validate_year(&self.min_year)?;
        NumberValidator::validate_year(&self.max_year)?;
        NumberValidator::validate_rating(&self.min_rating)?;

        // 仅含空白的关键词视为未设置
        let keywords = self
            .keywords
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty());

        Ok(SearchCriteria {
            content_kind,
            keywords,
            genre,
            min_year: self.min_year,
            max_year: self.max_year,
            min_rating: self.min_rating,
        })
    }
}

/// 排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// 保持仓库枚举顺序
    #[default]
    Relevance,
    TitleAscending,
    TitleDescending,
    YearNewest,
    YearOldest,
    RatingHighest,
    RatingLowest,
}

impl SortMode {
    pub const ALL: [SortMode; 7] = [
        SortMode::Relevance,
        SortMode::TitleAscending,
        SortMode::TitleDescending,
        SortMode::YearNewest,
        SortMode::YearOldest,
        SortMode::RatingHighest,
        SortMode::RatingLowest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::TitleAscending => "title_asc",
            SortMode::TitleDescending => "title_desc",
            SortMode::YearNewest => "year_newest",
            SortMode::YearOldest => "year_oldest",
            SortMode::RatingHighest => "rating_highest",
            SortMode::RatingLowest => "rating_lowest",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "relevance" => Ok(SortMode::Relevance),
            "title_asc" | "title_ascending" => Ok(SortMode::TitleAscending),
            "title_desc" | "title_descending" => Ok(SortMode::TitleDescending),
            "year_newest" => Ok(SortMode::YearNewest),
            "year_oldest" => Ok(SortMode::YearOldest),
            "rating_highest" => Ok(SortMode::RatingHighest),
            "rating_lowest" => Ok(SortMode::RatingLowest),
            _ => Err(ValidationError::InvalidSortMode(s.to_string())),
        }
    }
}
