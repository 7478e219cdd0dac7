// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::document::{DocumentElement, DocumentParser, StructuredDocument};
use crate::domain::search::engine::SearchError;
use scraper::{ElementRef, Html, Selector};

/// [`StructuredDocument`] backed by `scraper`'s HTML5 parser.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// The HTML5 parser recovers from any markup error, so every body yields
    /// a document.
    pub fn parse(html_content: &str) -> Self {
        Self {
            html: Html::parse_document(html_content),
        }
    }
}

/// [`DocumentParser`] producing [`HtmlDocument`]s. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl DocumentParser for HtmlParser {
    type Document = HtmlDocument;

    fn parse(&self, body: &str) -> Result<HtmlDocument, SearchError> {
        Ok(HtmlDocument::parse(body))
    }
}

fn compile(selector: &str) -> Result<Selector, SearchError> {
    Selector::parse(selector).map_err(|e| SearchError::Selector(format!("{}: {:?}", selector, e)))
}

impl StructuredDocument for HtmlDocument {
    type Element<'a> = HtmlElement<'a>;

    fn find_all(&self, selector: &str) -> Result<Vec<HtmlElement<'_>>, SearchError> {
        let selector = compile(selector)?;
        Ok(self.html.select(&selector).map(HtmlElement).collect())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl DocumentElement for HtmlElement<'_> {
    fn find_all(&self, selector: &str) -> Result<Vec<Self>, SearchError> {
        let selector = compile(selector)?;
        Ok(self.0.select(&selector).map(HtmlElement).collect())
    }

    fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }
}
