// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use crate::integration::helpers::{results_page, snippet, ScriptedPageSource};
    use gofind::domain::models::search_options::SearchOptions;
    use gofind::domain::models::search_record::SearchRecord;
    use gofind::domain::search::document::DocumentParser;
    use gofind::domain::search::engine::{AggregateError, SearchError};
    use gofind::domain::search::query::Query;
    use gofind::infrastructure::search::html_document::{HtmlDocument, HtmlParser};
    use gofind::infrastructure::search::SearchAggregator;

    /// Accepts only bodies that declare an HTML doctype.
    struct DoctypeParser;

    impl DocumentParser for DoctypeParser {
        type Document = HtmlDocument;

        fn parse(&self, body: &str) -> Result<HtmlDocument, SearchError> {
            if body.trim_start().starts_with("<!DOCTYPE html>") {
                HtmlParser.parse(body)
            } else {
                Err(SearchError::Parse("missing HTML doctype".to_string()))
            }
        }
    }

    fn names(records: &[SearchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    async fn collect(
        source: ScriptedPageSource,
        all_pages: bool,
    ) -> (
        SearchAggregator<ScriptedPageSource>,
        Result<Vec<SearchRecord>, AggregateError>,
    ) {
        let aggregator = SearchAggregator::new(source);
        let query = Query::new(["yaml"]);
        let result = aggregator
            .collect(&query, &query.encode(), &SearchOptions::new(all_pages, false))
            .await;
        (aggregator, result)
    }

    #[tokio::test]
    async fn test_single_page_mode_fetches_only_first_page() {
        let source = ScriptedPageSource::new()
            .page(1, results_page(&[snippet("a", None, None)], Some(5)))
            .page(2, results_page(&[snippet("b", None, None)], Some(5)));

        let (aggregator, result) = collect(source, false).await;

        assert_eq!(names(&result.unwrap()), vec!["a"]);
        assert_eq!(aggregator.source().requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_all_pages_follows_reported_total() {
        let source = ScriptedPageSource::new()
            .page(
                1,
                results_page(
                    &[snippet("a", None, None), snippet("b", None, None)],
                    Some(3),
                ),
            )
            .page(2, results_page(&[snippet("c", None, None)], Some(3)))
            .page(3, results_page(&[snippet("d", None, None)], Some(3)))
            .page(4, results_page(&[snippet("never", None, None)], Some(4)));

        let (aggregator, result) = collect(source, true).await;

        assert_eq!(names(&result.unwrap()), vec!["a", "b", "c", "d"]);
        assert_eq!(aggregator.source().requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_total_is_reread_on_every_page() {
        let source = ScriptedPageSource::new()
            .page(1, results_page(&[snippet("a", None, None)], Some(2)))
            .page(2, results_page(&[snippet("b", None, None)], Some(3)))
            .page(3, results_page(&[snippet("c", None, None)], Some(3)));

        let (aggregator, result) = collect(source, true).await;

        assert_eq!(names(&result.unwrap()), vec!["a", "b", "c"]);
        assert_eq!(aggregator.source().requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_shrinking_total_stops_early() {
        let source = ScriptedPageSource::new()
            .page(1, results_page(&[snippet("a", None, None)], Some(4)))
            .page(2, results_page(&[snippet("b", None, None)], Some(2)));

        let (aggregator, result) = collect(source, true).await;

        assert_eq!(names(&result.unwrap()), vec!["a", "b"]);
        assert_eq!(aggregator.source().requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_no_pagination_means_single_page() {
        let source = ScriptedPageSource::new()
            .page(1, results_page(&[snippet("only", None, None)], None));

        let (aggregator, result) = collect(source, true).await;

        assert_eq!(names(&result.unwrap()), vec!["only"]);
        assert_eq!(aggregator.source().requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_empty_result_page_is_not_an_error() {
        let source = ScriptedPageSource::new().page(1, results_page(&[], None));

        let (_, result) = collect(source, true).await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_partial_records() {
        let source = ScriptedPageSource::new()
            .page(1, results_page(&[snippet("a", None, None)], Some(3)))
            .failing_page(2, 503, "Service Unavailable")
            .page(3, results_page(&[snippet("c", None, None)], Some(3)));

        let (aggregator, result) = collect(source, true).await;
        let err = result.unwrap_err();

        assert_eq!(names(&err.records), vec!["a"]);
        assert!(matches!(
            err.source,
            SearchError::RemoteStatus { code: 503, .. }
        ));
        assert_eq!(aggregator.source().requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_first_page_failure_has_no_records() {
        let source = ScriptedPageSource::new().failing_page(1, 500, "Internal Server Error");

        let (_, result) = collect(source, false).await;
        let err = result.unwrap_err();

        assert!(err.records.is_empty());
        assert_eq!(
            err.to_string(),
            "Search aborted after 0 records: Remote error: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_extraction_failure_keeps_partial_records() {
        let source = ScriptedPageSource::new()
            .page(1, results_page(&[snippet("a", None, None)], Some(3)))
            .page(2, r#"{"error": "not html"}"#.to_string())
            .page(3, results_page(&[snippet("c", None, None)], Some(3)));
        let aggregator = SearchAggregator::with_parser(source, DoctypeParser);
        let query = Query::new(["yaml"]);

        let err = aggregator
            .collect(&query, &query.encode(), &SearchOptions::new(true, false))
            .await
            .unwrap_err();

        assert_eq!(names(&err.records), vec!["a"]);
        assert!(matches!(err.source, SearchError::Parse(_)));
        assert_eq!(aggregator.source().requested(), vec![1, 2]);
    }
}
