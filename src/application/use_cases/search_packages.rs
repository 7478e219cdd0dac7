// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::Write;

use tracing::warn;

use crate::config::settings::OutputSettings;
use crate::domain::models::search_options::SearchOptions;
use crate::domain::search::engine::{PageSource, SearchError};
use crate::domain::search::query::Query;
use crate::infrastructure::search::aggregator::SearchAggregator;
use crate::presentation::renderer::ResultRenderer;

/// 搜索用例
///
/// Encodes the query, aggregates result pages and renders the records.
pub struct SearchPackagesUseCase<S> {
    aggregator: SearchAggregator<S>,
    output: OutputSettings,
}

impl<S: PageSource> SearchPackagesUseCase<S> {
    pub fn new(source: S, output: OutputSettings) -> Self {
        Self {
            aggregator: SearchAggregator::new(source),
            output,
        }
    }

    /// Runs one search and writes the results to `out`.
    ///
    /// Returns the number of records written. When a page fails, the records
    /// gathered before it are still written and the page's error is returned.
    pub async fn execute<W: Write>(
        &self,
        query: &Query,
        options: &SearchOptions,
        out: &mut W,
    ) -> Result<usize, SearchError> {
        let encoded = query.encode();
        let renderer = ResultRenderer::new(options.output_mode(), self.output);

        match self.aggregator.collect(query, &encoded, options).await {
            Ok(records) => {
                renderer.render_all(&records, out)?;
                Ok(records.len())
            }
            Err(err) => {
                warn!(
                    records = err.records.len(),
                    error = %err.source,
                    "Search aborted, writing partial results"
                );
                renderer.render_all(&err.records, out)?;
                Err(err.source)
            }
        }
    }
}
