// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// How records are written to the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `name\tsynopsis\tinfo`, one line per record
    Raw,
    /// Name, wrapped synopsis and info as an indented block
    #[default]
    Formatted,
}

/// Options of a single search invocation, built once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Follow the pagination control instead of stopping after page 1
    pub all_pages: bool,
    pub raw: bool,
}

impl SearchOptions {
    pub fn new(all_pages: bool, raw: bool) -> Self {
        Self { all_pages, raw }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.raw {
            OutputMode::Raw
        } else {
            OutputMode::Formatted
        }
    }
}
