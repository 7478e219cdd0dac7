// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_record::SearchRecord;
use crate::domain::search::query::EncodedQuery;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// DNS, connection, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Remote error: {code} {text}")]
    RemoteStatus { code: u16, text: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid selector: {0}")]
    Selector(String),
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Aggregation stopped on a failing page.
///
/// `records` holds everything gathered from the pages before it.
#[derive(Debug, Error)]
#[error("Search aborted after {} records: {source}", .records.len())]
pub struct AggregateError {
    pub records: Vec<SearchRecord>,
    #[source]
    pub source: SearchError,
}

/// Source of raw search result pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the body of 1-based page `page` for `query`, decoded to text.
    ///
    /// The body is fully read before returning, so no connection is held
    /// once this resolves.
    async fn fetch_page(&self, query: &EncodedQuery, page: u32) -> Result<String, SearchError>;
}
