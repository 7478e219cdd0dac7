// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use url::form_urlencoded;

/// Search terms exactly as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Joins the terms with single spaces, quoting every term that contains
    /// whitespace so the remote engine matches it as a phrase.
    pub fn phrase(&self) -> String {
        self.terms
            .iter()
            .map(|term| {
                if term.contains(char::is_whitespace) {
                    format!("\"{}\"", term)
                } else {
                    term.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Form-encodes the phrase as the `q` parameter.
    pub fn encode(&self) -> EncodedQuery {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.phrase())
            .finish();
        EncodedQuery(encoded)
    }
}

/// A `q=...` pair ready to be placed in a URL query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQuery(String);

impl EncodedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
