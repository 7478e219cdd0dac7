// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_record::SearchRecord;
use crate::domain::search::document::{DocumentElement, StructuredDocument};
use crate::domain::search::engine::SearchError;
use crate::infrastructure::search::html_document::HtmlDocument;
use tracing::{debug, warn};

/// pkg.go.dev 搜索结果页的选择器
pub const SNIPPET_SELECTOR: &str = ".SearchSnippet";
pub const HEADER_SELECTOR: &str = ".SearchSnippet-headerContainer h2";
pub const SYNOPSIS_SELECTOR: &str = ".SearchSnippet-synopsis";
pub const INFO_SELECTOR: &str = ".SearchSnippet-infoLabel";
pub const PAGINATION_SELECTOR: &str = ".Pagination-number";

const INFO_SEPARATOR: &str = " | ";

/// Records found on one results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    pub records: Vec<SearchRecord>,
    /// Last page number advertised by the pagination control. `None` when the
    /// page has no usable pagination control.
    pub total_pages: Option<u32>,
}

/// Parses a response body as HTML and extracts it.
pub fn extract_page(body: &str) -> Result<ExtractedPage, SearchError> {
    extract_document(&HtmlDocument::parse(body))
}

/// 解析搜索结果文档
///
/// Missing synopsis, info or pagination never fail extraction; they become
/// empty values.
pub fn extract_document<D: StructuredDocument>(document: &D) -> Result<ExtractedPage, SearchError> {
    let mut records = Vec::new();

    for snippet in document.find_all(SNIPPET_SELECTOR)? {
        let name = snippet.first_text(HEADER_SELECTOR)?.unwrap_or_default();
        let synopsis = snippet.first_text(SYNOPSIS_SELECTOR)?.unwrap_or_default();
        let info = snippet
            .first_text(INFO_SELECTOR)?
            .map(|raw| normalize_info(&raw))
            .unwrap_or_default();

        records.push(SearchRecord::new(name, synopsis, info));
    }

    let total_pages = match document.find_all(PAGINATION_SELECTOR)?.last() {
        Some(element) => parse_total(&element.text()),
        None => None,
    };

    debug!(
        records = records.len(),
        total_pages = ?total_pages,
        "Extracted search page"
    );

    Ok(ExtractedPage {
        records,
        total_pages,
    })
}

/// Normalizes a pipe-delimited `label: value` list.
///
/// Each segment is split on its first colon and both halves trimmed. Segments
/// without a colon are dropped.
pub fn normalize_info(raw: &str) -> String {
    raw.split('|')
        .filter_map(|segment| {
            let (label, value) = segment.split_once(':')?;
            Some(format!("{}: {}", label.trim(), value.trim()))
        })
        .collect::<Vec<_>>()
        .join(INFO_SEPARATOR)
}

fn parse_total(text: &str) -> Option<u32> {
    let text = text.trim();
    match text.parse::<u32>() {
        Ok(total) => Some(total),
        Err(e) => {
            warn!(text, error = %e, "Ignoring unparseable pagination total");
            None
        }
    }
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod tests;
