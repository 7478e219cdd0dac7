// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::Write;

use crate::config::settings::OutputSettings;
use crate::domain::models::search_options::OutputMode;
use crate::domain::models::search_record::SearchRecord;
use crate::domain::search::engine::SearchError;
use crate::utils::text_processing::wrap_words;

/// Writes search records to an output sink.
#[derive(Debug, Clone, Copy)]
pub struct ResultRenderer {
    mode: OutputMode,
    output: OutputSettings,
}

impl ResultRenderer {
    pub fn new(mode: OutputMode, output: OutputSettings) -> Self {
        Self { mode, output }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// 输出单条记录
    ///
    /// Raw mode writes `name\tsynopsis\tinfo`. Formatted mode writes the name,
    /// the wrapped synopsis, a blank line, the info line and a closing blank
    /// line; synopsis and info lines are skipped when empty.
    pub fn render<W: Write>(&self, record: &SearchRecord, out: &mut W) -> Result<(), SearchError> {
        match self.mode {
            OutputMode::Raw => {
                writeln!(out, "{}\t{}\t{}", record.name, record.synopsis, record.info)?;
            }
            OutputMode::Formatted => self.render_formatted(record, out)?,
        }
        Ok(())
    }

    pub fn render_all<W: Write>(
        &self,
        records: &[SearchRecord],
        out: &mut W,
    ) -> Result<(), SearchError> {
        for record in records {
            self.render(record, out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn render_formatted<W: Write>(&self, record: &SearchRecord, out: &mut W) -> std::io::Result<()> {
        let indent = " ".repeat(self.output.indent);

        writeln!(out, "{}", record.name)?;
        if !record.synopsis.is_empty() {
            let width = self.output.width.saturating_sub(self.output.indent);
            for line in wrap_words(&record.synopsis, width) {
                writeln!(out, "{}{}", indent, line)?;
            }
        }
        writeln!(out)?;
        if !record.info.is_empty() {
            writeln!(out, "{}{}", indent, record.info)?;
        }
        writeln!(out)
    }
}
