// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;
use crate::domain::search::engine::{PageSource, SearchError};
use crate::domain::search::query::EncodedQuery;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Fetches result pages from the search endpoint over HTTP.
pub struct HttpPageFetcher {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPageFetcher {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .build()?;

        Ok(Self::with_client(client, settings.endpoint.clone()))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// `<endpoint>?q=<query>&page=<page>`
    pub fn page_url(&self, query: &EncodedQuery, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&format!("{}&page={}", query, page)));
        url
    }
}

#[async_trait]
impl PageSource for HttpPageFetcher {
    async fn fetch_page(&self, query: &EncodedQuery, page: u32) -> Result<String, SearchError> {
        let url = self.page_url(query, page);
        debug!(%url, page, "Fetching search page");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("text/html"))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SearchError::RemoteStatus {
                code: status.as_u16(),
                text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Decodes by the declared charset; undecodable bytes become U+FFFD.
        let body = response.text().await?;
        debug!(page, bytes = body.len(), "Fetched search page");

        Ok(body)
    }
}
