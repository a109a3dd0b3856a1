// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). Keyword ids in
//! matches index the top-level `keywords` array.

use std::io::Write;

use serde::Serialize;

use super::InputReport;
use crate::keyword::Keyword;
use crate::report::Report;
use crate::timing::PhaseTiming;

#[derive(Debug, Serialize)]
struct JsonInput<'a> {
    path: String,
    #[serde(flatten)]
    report: &'a Report,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    keywords: &'a [Keyword],
    total: usize,
    inputs: Vec<JsonInput<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timing: Option<&'a PhaseTiming>,
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON document.
    pub fn write(
        &mut self,
        reports: &[InputReport],
        keywords: &[Keyword],
        timing: Option<&PhaseTiming>,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            keywords,
            total: InputReport::total(reports),
            inputs: reports
                .iter()
                .map(|r| JsonInput {
                    path: r.input.to_string(),
                    report: &r.report,
                })
                .collect(),
            timing,
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
