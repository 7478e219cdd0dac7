// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{debug, info};

use crate::domain::models::search_options::SearchOptions;
use crate::domain::models::search_record::SearchRecord;
use crate::domain::search::document::DocumentParser;
use crate::domain::search::engine::{AggregateError, PageSource, SearchError};
use crate::domain::search::query::{EncodedQuery, Query};
use crate::infrastructure::search::extractor::{extract_document, ExtractedPage};
use crate::infrastructure::search::html_document::HtmlParser;

/// State of the page loop.
#[derive(Debug)]
pub enum PageState {
    Fetching(u32),
    Done,
    Failed(SearchError),
}

/// Decides what follows a successfully extracted page.
///
/// `reported_total` is whatever the page just fetched advertised; a page with
/// no total is the last one.
pub fn next_state(page: u32, reported_total: Option<u32>, all_pages: bool) -> PageState {
    if !all_pages {
        return PageState::Done;
    }
    match (reported_total, page.checked_add(1)) {
        (Some(total), Some(next)) if next <= total => PageState::Fetching(next),
        _ => PageState::Done,
    }
}

/// Walks result pages one at a time and concatenates their records.
pub struct SearchAggregator<S, P = HtmlParser> {
    source: S,
    parser: P,
}

impl<S: PageSource> SearchAggregator<S> {
    pub fn new(source: S) -> Self {
        Self::with_parser(source, HtmlParser)
    }
}

impl<S: PageSource, P: DocumentParser> SearchAggregator<S, P> {
    pub fn with_parser(source: S, parser: P) -> Self {
        Self { source, parser }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the page loop.
    ///
    /// Page `n + 1` is requested only after page `n` has been fetched and
    /// extracted. On failure the records collected so far travel with the
    /// error.
    pub async fn collect(
        &self,
        query: &Query,
        encoded: &EncodedQuery,
        options: &SearchOptions,
    ) -> Result<Vec<SearchRecord>, AggregateError> {
        let mut records = Vec::new();
        let mut pages = 0u32;
        let mut state = PageState::Fetching(1);

        loop {
            state = match state {
                PageState::Fetching(page) => match self.load(encoded, page).await {
                    Ok(extracted) => {
                        pages += 1;
                        debug!(
                            page,
                            records = extracted.records.len(),
                            total_pages = ?extracted.total_pages,
                            "Page extracted"
                        );
                        records.extend(extracted.records);
                        next_state(page, extracted.total_pages, options.all_pages)
                    }
                    Err(e) => PageState::Failed(e),
                },
                PageState::Done => {
                    info!(
                        query = %query.phrase(),
                        pages,
                        records = records.len(),
                        "Search completed"
                    );
                    return Ok(records);
                }
                PageState::Failed(source) => {
                    return Err(AggregateError { records, source });
                }
            }
        }
    }

    async fn load(&self, encoded: &EncodedQuery, page: u32) -> Result<ExtractedPage, SearchError> {
        let body = self.source.fetch_page(encoded, page).await?;
        let document = self.parser.parse(&body)?;
        extract_document(&document)
    }
}
