// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::automaton::{Automaton, SearchOptions};
use crate::keyword::KeywordSet;
use crate::scan::Match;

/// Detect-only keyword set from patterns.
pub fn detect_set(patterns: &[&str]) -> KeywordSet {
    KeywordSet::new(patterns.iter().map(|p| (*p, None))).unwrap()
}

/// Build with default options and collect every match in `text`.
pub fn find(patterns: &[&str], text: &str) -> Vec<Match> {
    Automaton::build(&detect_set(patterns), SearchOptions::default())
        .unwrap()
        .find_all(text)
}
