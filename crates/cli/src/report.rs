// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match reports.
//!
//! Two views over one match sequence:
//! - offset mode: `(start, end, keyword)` in text coordinates
//! - line mode: each match attributed to the line holding its start, with
//!   columns relative to that line
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`; terminators are not part of the
//! line content.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::keyword::KeywordId;
use crate::scan::Match;

/// Report layout selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// Whole-text byte offsets (mode string `""`).
    #[default]
    Offset,
    /// Line content plus columns (mode string `"l"`).
    Line,
}

impl FromStr for ReportMode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "" => Ok(ReportMode::Offset),
            "l" => Ok(ReportMode::Line),
            other => Err(Error::Validation(format!(
                "unknown match mode {other:?} (expected \"\" or \"l\")"
            ))),
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Offset => write!(f, "offset"),
            ReportMode::Line => write!(f, "line"),
        }
    }
}

/// A match located within its line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number.
    pub line: u32,
    /// The line, without its terminator.
    pub content: String,
    /// Byte column where the match starts.
    pub start: usize,
    /// Byte column where the match ends (exclusive).
    pub end: usize,
    pub keyword: KeywordId,
}

/// Formatted result of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "matches", rename_all = "lowercase")]
pub enum Report {
    Offset(Vec<Match>),
    Line(Vec<LineMatch>),
}

impl Report {
    /// Format a match sequence for `text` in the given mode.
    pub fn build<I>(text: &str, matches: I, mode: ReportMode) -> Self
    where
        I: IntoIterator<Item = Match>,
    {
        match mode {
            ReportMode::Offset => Report::Offset(matches.into_iter().collect()),
            ReportMode::Line => Report::Line(lines(text, matches)),
        }
    }

    pub fn mode(&self) -> ReportMode {
        match self {
            Report::Offset(_) => ReportMode::Offset,
            Report::Line(_) => ReportMode::Line,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Report::Offset(m) => m.len(),
            Report::Line(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Attribute matches to lines.
///
/// Matches must be sorted by start and must not contain line terminators,
/// which holds for any session's scan.
pub fn lines<I>(text: &str, matches: I) -> Vec<LineMatch>
where
    I: IntoIterator<Item = Match>,
{
    let mut cursor = LineCursor::new(text);
    matches
        .into_iter()
        .map(|m| {
            cursor.seek(m.start);
            LineMatch {
                line: cursor.number,
                content: cursor.content().to_string(),
                start: m.start - cursor.start,
                end: m.end - cursor.start,
                keyword: m.keyword,
            }
        })
        .collect()
}

/// Forward-only walk over line bounds.
struct LineCursor<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    number: u32,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            start: 0,
            end: line_end(text, 0),
            number: 1,
        }
    }

    fn content(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    /// Advance to the line containing byte `offset`.
    fn seek(&mut self, offset: usize) {
        while offset >= self.end && self.end < self.text.len() {
            let terminator = if self.text[self.end..].starts_with("\r\n") {
                2
            } else {
                1
            };
            self.start = self.end + terminator;
            self.end = line_end(self.text, self.start);
            self.number += 1;
        }
    }
}

fn line_end(text: &str, from: usize) -> usize {
    memchr::memchr2(b'\n', b'\r', &text.as_bytes()[from..]).map_or(text.len(), |i| from + i)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
