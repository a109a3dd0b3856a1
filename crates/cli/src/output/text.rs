// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Offset mode prints one line per match:
//! ```text
//! <path>:<start>-<end>: <matched text> (<label>)
//! ```
//! Line mode prints each matching line once, with every match highlighted:
//! ```text
//! <path>:<line>: <line content> (<labels>)
//! ```
//! The path prefix appears only when several inputs are searched. Labels are
//! shown only when they differ from the matched text.

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{FormatOptions, InputReport};
use crate::color::scheme;
use crate::keyword::{Keyword, KeywordId};
use crate::report::{LineMatch, Report};
use crate::scan::Match;

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
    options: FormatOptions,
    matches_shown: usize,
    truncated: bool,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            matches_shown: 0,
            truncated: false,
        }
    }

    /// Write the matches of one input.
    /// Returns true if output was truncated.
    pub fn write_input(
        &mut self,
        result: &InputReport,
        keywords: &[Keyword],
    ) -> std::io::Result<bool> {
        let path = self.options.show_paths.then(|| result.input.to_string());
        match &result.report {
            Report::Offset(found) => {
                for m in found {
                    if self.at_limit() {
                        return Ok(true);
                    }
                    self.write_offset(path.as_deref(), &result.text, m, keywords)?;
                    self.matches_shown += 1;
                }
            }
            Report::Line(found) => {
                for group in found.chunk_by(|a, b| a.line == b.line) {
                    let room = self.room();
                    let shown = &group[..group.len().min(room)];
                    if !shown.is_empty() {
                        self.write_line(path.as_deref(), shown, keywords)?;
                        self.matches_shown += shown.len();
                    }
                    if shown.len() < group.len() {
                        self.truncated = true;
                        return Ok(true);
                    }
                }
            }
        }
        Ok(false)
    }

    fn room(&self) -> usize {
        self.options
            .limit
            .map_or(usize::MAX, |limit| limit.saturating_sub(self.matches_shown))
    }

    fn at_limit(&mut self) -> bool {
        if self.room() == 0 {
            self.truncated = true;
        }
        self.truncated
    }

    fn write_prefix(&mut self, path: Option<&str>, position: &str) -> std::io::Result<()> {
        if let Some(path) = path {
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", path)?;
            self.out.reset()?;
            write!(self.out, ":")?;
        }
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}", position)?;
        self.out.reset()?;
        write!(self.out, ": ")
    }

    fn write_offset(
        &mut self,
        path: Option<&str>,
        text: &str,
        m: &Match,
        keywords: &[Keyword],
    ) -> std::io::Result<()> {
        let matched = &text[m.span()];
        self.write_prefix(path, &format!("{}-{}", m.start, m.end))?;
        self.out.set_color(&scheme::matched())?;
        write!(self.out, "{}", matched)?;
        self.out.reset()?;
        self.write_labels([(m.keyword, matched)], keywords)?;
        writeln!(self.out)
    }

    fn write_line(
        &mut self,
        path: Option<&str>,
        group: &[LineMatch],
        keywords: &[Keyword],
    ) -> std::io::Result<()> {
        let Some(first) = group.first() else {
            return Ok(());
        };
        let content = first.content.as_str();
        self.write_prefix(path, &first.line.to_string())?;

        let mut cursor = 0;
        for m in group {
            write!(self.out, "{}", &content[cursor..m.start])?;
            self.out.set_color(&scheme::matched())?;
            write!(self.out, "{}", &content[m.start..m.end])?;
            self.out.reset()?;
            cursor = m.end;
        }
        write!(self.out, "{}", &content[cursor..])?;

        self.write_labels(
            group.iter().map(|m| (m.keyword, &content[m.start..m.end])),
            keywords,
        )?;
        writeln!(self.out)
    }

    fn write_labels<'t>(
        &mut self,
        found: impl IntoIterator<Item = (KeywordId, &'t str)>,
        keywords: &[Keyword],
    ) -> std::io::Result<()> {
        let mut labels: Vec<&str> = Vec::new();
        for (id, matched) in found {
            if let Some(keyword) = keywords.get(id.index()) {
                let label = keyword.label();
                if label != matched && !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
        if labels.is_empty() {
            return Ok(());
        }
        write!(self.out, " ")?;
        self.out.set_color(&scheme::label())?;
        write!(self.out, "({})", labels.join(", "))?;
        self.out.reset()
    }

    /// Write truncation message if applicable.
    pub fn write_truncation_message(&mut self, total: usize) -> std::io::Result<()> {
        if let Some(limit) = self.options.limit
            && self.truncated
            && total > limit
        {
            writeln!(
                self.out,
                "Stopped after {} of {} matches. Raise --limit to see more.",
                limit, total
            )?;
        }
        Ok(())
    }

    /// Check if output was truncated.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Get the number of matches shown.
    pub fn matches_shown(&self) -> usize {
        self.matches_shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
