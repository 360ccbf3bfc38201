// 排序策略
//
// 除 Relevance 外，每种排序都以 ID 作为最后的比较键，
// 因此不同 ID 的记录之间总能分出先后，排序结果可复现。

use std::cmp::Ordering;

use crate::models::{ContentRecord, SortMode};

/// 对筛选后的结果原地排序
pub fn rank(records: &mut [ContentRecord], mode: SortMode) {
    if mode == SortMode::Relevance {
        return;
    }
    // 稳定排序，同键记录保持仓库顺序
    records.sort_by(|a, b| compare(a, b, mode));
}

/// 按排序方式比较两条记录
pub fn compare(a: &ContentRecord, b: &ContentRecord, mode: SortMode) -> Ordering {
    let primary = match mode {
        SortMode::Relevance => return Ordering::Equal,
        SortMode::TitleAscending => compare_titles(a, b),
        SortMode::TitleDescending => compare_titles(b, a),
        SortMode::YearNewest => unknown_last(a.year, b.year, |x, y| y.cmp(x)),
        SortMode::YearOldest => unknown_last(a.year, b.year, |x, y| x.cmp(y)),
        SortMode::RatingHighest => unknown_last(a.rating, b.rating, |x, y| y.total_cmp(x)),
        SortMode::RatingLowest => unknown_last(a.rating, b.rating, |x, y| x.total_cmp(y)),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

fn compare_titles(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// 缺失值无论升降序都排在最后
fn unknown_last<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => cmp(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
