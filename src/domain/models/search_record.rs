// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// One matched package scraped from a search results page.
///
/// Fields are never optional: a value the page did not provide is an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRecord {
    pub name: String,
    pub synopsis: String,
    /// Normalized `label: value` segments joined by `" | "`.
    pub info: String,
}

impl SearchRecord {
    pub fn new(
        name: impl Into<String>,
        synopsis: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            synopsis: synopsis.into(),
            info: info.into(),
        }
    }
}
