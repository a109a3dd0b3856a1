// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A compiled search session: one automaton plus the keywords it came from.

use crate::automaton::{Automaton, SearchOptions};
use crate::error::Result;
use crate::keyword::{Keyword, KeywordId, KeywordSet};
use crate::report::{Report, ReportMode};
use crate::scan::Matches;
use crate::subst;

/// Immutable, shareable search session.
#[derive(Debug)]
pub struct Session {
    keywords: KeywordSet,
    automaton: Automaton,
}

impl Session {
    /// Validate and compile `keywords`.
    ///
    /// Patterns containing a line terminator are rejected with `SpanOverflow`
    /// so that line-mode reports never straddle lines.
    pub fn new(keywords: KeywordSet, options: SearchOptions) -> Result<Self> {
        keywords.check_single_line()?;
        let automaton = Automaton::build(&keywords, options)?;
        Ok(Self {
            keywords,
            automaton,
        })
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn keyword(&self, id: KeywordId) -> Option<&Keyword> {
        self.keywords.get(id)
    }

    pub fn find_iter<'a>(&'a self, text: &'a str) -> Matches<'a> {
        self.automaton.find_iter(text)
    }

    pub fn substitute(&self, text: &str) -> String {
        subst::substitute(&self.automaton, &self.keywords, text)
    }

    pub fn report(&self, text: &str, mode: ReportMode) -> Report {
        Report::build(text, self.find_iter(text), mode)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
