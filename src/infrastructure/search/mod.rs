// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索服务模块
///
/// pkg.go.dev 搜索页的抓取、解析与分页聚合
pub mod aggregator;
pub mod extractor;
pub mod fetcher;
pub mod html_document;

pub use aggregator::SearchAggregator;
pub use fetcher::HttpPageFetcher;
