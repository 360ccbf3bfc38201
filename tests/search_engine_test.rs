// 搜索引擎集成测试
//
// 通过库的公开接口验证条件构建、筛选、排序和会话内取消

#[cfg(test)]
mod search_engine_tests {
    use std::sync::Arc;

    use media_catalog::database::{ContentRepository, MemoryRepository};
    use media_catalog::models::{ContentFactory, ContentKind, Genre, SearchCriteria, SortMode, ValidationError};
    use media_catalog::services::search::{QueryOutcome, QueryState, SearchExecutor, SearchResults};

    fn catalog_executor() -> (Arc<MemoryRepository>, SearchExecutor) {
        let repository = Arc::new(MemoryRepository::new(ContentFactory::sample_catalog().unwrap()));
        let executor = SearchExecutor::new(repository.clone());
        (repository, executor)
    }

    fn expect_success(outcome: QueryOutcome) -> SearchResults {
        match outcome {
            QueryOutcome::Succeeded(results) => results,
            other => panic!("expected success, got {:?}", other),
        }
    }

    fn ids(results: &SearchResults) -> Vec<&str> {
        results.items.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_no_filter_returns_whole_catalog_for_every_sort() {
        let (repository, executor) = catalog_executor();
        let snapshot = repository.all_content().await.unwrap();

        for sort in SortMode::ALL {
            let results = expect_success(
                executor
                    .submit(SearchCriteria::default(), sort, "browse")
                    .outcome()
                    .await,
            );
            assert_eq!(results.total, snapshot.len(), "sort={}", sort);

            let mut got: Vec<&str> = ids(&results);
            let mut expected: Vec<&str> = snapshot.iter().map(|r| r.id.as_str()).collect();
            got.sort();
            expected.sort();
            assert_eq!(got, expected, "sort={}", sort);
        }
    }

    #[tokio::test]
    async fn test_year_newest_puts_unknown_years_last() {
        let (_, executor) = catalog_executor();
        let results = expect_success(
            executor
                .submit(SearchCriteria::default(), SortMode::YearNewest, "browse")
                .outcome()
                .await,
        );

        let years: Vec<Option<i32>> = results.items.iter().map(|r| r.year).collect();
        assert_eq!(years.first().copied().flatten(), Some(2024));
        assert_eq!(&years[years.len() - 2..], &[None, None]);
    }

    #[tokio::test]
    async fn test_combined_filters() {
        let (_, executor) = catalog_executor();
        let criteria = SearchCriteria::builder()
            .content_kind_str("series")
            .genre_str("thriller")
            .min_rating(9.0)
            .build()
            .unwrap();

        let results = expect_success(executor.submit(criteria, SortMode::TitleAscending, "s").outcome().await);
        assert_eq!(ids(&results), vec!["s-001"]);
    }

    #[tokio::test]
    async fn test_keyword_matches_creator_and_genre_name() {
        let (_, executor) = catalog_executor();

        let by_creator = SearchCriteria::builder().keywords("VILLENEUVE").build().unwrap();
        let results = expect_success(executor.submit(by_creator, SortMode::YearOldest, "s").outcome().await);
        assert_eq!(ids(&results), vec!["m-003", "m-001", "m-002"]);

        let by_genre = SearchCriteria::builder()
            .keywords("science fiction")
            .content_kind(ContentKind::Series)
            .build()
            .unwrap();
        let results = expect_success(executor.submit(by_genre, SortMode::Relevance, "s").outcome().await);
        assert_eq!(ids(&results), vec!["s-003"]);
    }

    #[tokio::test]
    async fn test_year_range_excludes_unknown_year() {
        let (_, executor) = catalog_executor();
        let criteria = SearchCriteria::builder().year_range(2000, 2010).build().unwrap();

        let results = expect_success(executor.submit(criteria, SortMode::YearOldest, "s").outcome().await);
        assert!(results.items.iter().all(|r| r.year.is_some()));
        assert_eq!(ids(&results), vec!["m-005", "s-004", "s-002", "m-006", "s-001"]);
    }

    #[tokio::test]
    async fn test_inverted_range_is_empty_not_error() {
        let (_, executor) = catalog_executor();
        let criteria = SearchCriteria::builder().min_year(2020).max_year(2001).build().unwrap();

        let results = expect_success(executor.submit(criteria, SortMode::Relevance, "s").outcome().await);
        assert_eq!(results.total, 0);
    }

    #[test]
    fn test_invalid_criteria_rejected_before_submission() {
        let err = SearchCriteria::builder().genre_str("Telenovela").build().unwrap_err();
        assert!(err.is_invalid_criteria());

        let err = SearchCriteria::builder().min_rating(-1.0).build().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRating(_)));
    }

    #[tokio::test]
    async fn test_back_to_back_queries_same_session() {
        let (_, executor) = catalog_executor();

        let first = executor.submit(
            SearchCriteria::builder().genre(Genre::Comedy).build().unwrap(),
            SortMode::Relevance,
            "ui",
        );
        let second = executor.submit(
            SearchCriteria::builder().genre(Genre::Drama).build().unwrap(),
            SortMode::RatingHighest,
            "ui",
        );

        let results = expect_success(second.outcome().await);
        assert!(results.items.iter().all(|r| r.genres.contains(&Genre::Drama)));
        assert_eq!(results.items[0].id, "s-001");

        assert!(first.state().is_terminal());
        assert_eq!(first.state(), QueryState::Cancelled);
        assert!(first.outcome().await.is_cancelled());
    }
}
