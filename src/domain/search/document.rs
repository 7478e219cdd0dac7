// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::SearchError;

/// Turns a page body into a [`StructuredDocument`].
pub trait DocumentParser: Send + Sync {
    type Document: StructuredDocument;

    /// Fails with [`SearchError::Parse`] only when the body cannot be read as
    /// a document at all.
    fn parse(&self, body: &str) -> Result<Self::Document, SearchError>;
}

/// A parsed document that can be queried with CSS selectors.
pub trait StructuredDocument {
    type Element<'a>: DocumentElement
    where
        Self: 'a;

    /// All elements matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Result<Vec<Self::Element<'_>>, SearchError>;
}

/// An element inside a [`StructuredDocument`].
pub trait DocumentElement: Sized {
    /// Descendants matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Result<Vec<Self>, SearchError>;

    /// Concatenated text of the element, trimmed at both ends.
    fn text(&self) -> String;

    fn first_text(&self, selector: &str) -> Result<Option<String>, SearchError> {
        Ok(self.find_all(selector)?.first().map(|element| element.text()))
    }
}
