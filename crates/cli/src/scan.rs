// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass match engine.
//!
//! [`Matches`] pulls symbols from the text one at a time, advancing a cursor
//! through the automaton. Every keyword in the arrived node's output set is a
//! candidate ending at the current position. Candidates wait in a small
//! pending list until no occurrence still in progress could start at or
//! before them; then the best one is committed:
//! 1. earliest start
//! 2. longest
//! 3. lowest keyword id
//!
//! Candidates starting inside a committed span are discarded. Scan state lives
//! entirely in the iterator, and the pending list is bounded by the longest
//! pattern rather than the text length.

use std::cmp::Reverse;
use std::ops::Range;
use std::str::CharIndices;

use serde::Serialize;

use crate::automaton::{Automaton, StateId};
use crate::keyword::KeywordId;

/// A committed match in the input's byte coordinates. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub keyword: KeywordId,
}

impl Match {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// An uncommitted occurrence. Positions are in symbols.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: usize,
    len: usize,
    keyword: KeywordId,
    start_byte: usize,
    end_byte: usize,
}

impl Candidate {
    fn rank(&self) -> (usize, Reverse<usize>, KeywordId) {
        (self.start, Reverse(self.len), self.keyword)
    }

    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Lazy, left-to-right sequence of non-overlapping matches.
pub struct Matches<'a> {
    automaton: &'a Automaton,
    text: &'a str,
    symbols: CharIndices<'a>,
    state: StateId,
    /// Symbols consumed so far.
    consumed: usize,
    /// Byte offsets of the most recent symbols, indexed by symbol position modulo length.
    offsets: Vec<usize>,
    /// Candidates starting before this symbol position are discarded.
    floor: usize,
    pending: Vec<Candidate>,
    exhausted: bool,
}

impl<'a> Matches<'a> {
    pub fn new(automaton: &'a Automaton, text: &'a str) -> Self {
        Self {
            automaton,
            text,
            symbols: text.char_indices(),
            state: StateId::ROOT,
            consumed: 0,
            offsets: vec![0; automaton.max_pattern_len().max(1)],
            floor: 0,
            pending: Vec::new(),
            exhausted: automaton.is_empty(),
        }
    }

    fn step(&mut self, offset: usize, symbol: char) {
        let automaton = self.automaton;
        let ring = self.offsets.len();
        self.offsets[self.consumed % ring] = offset;
        self.consumed += 1;
        self.state = automaton.next_state(self.state, automaton.fold(symbol));

        let end_byte = offset + symbol.len_utf8();
        for &keyword in automaton.outputs(self.state) {
            let len = automaton.pattern_len(keyword);
            let start = self.consumed - len;
            if start < self.floor {
                continue;
            }
            let start_byte = self.offsets[start % ring];
            if automaton.options().word_boundaries
                && !is_word_bounded(self.text, start_byte, end_byte)
            {
                continue;
            }
            self.pending.push(Candidate {
                start,
                len,
                keyword,
                start_byte,
                end_byte,
            });
        }
    }

    /// Commit the best pending candidate if nothing unseen can outrank it.
    fn commit(&mut self) -> Option<Match> {
        let best = *self.pending.iter().min_by_key(|c| c.rank())?;
        if !self.exhausted {
            // Any occurrence still in progress started at or after this position.
            let horizon = self.consumed - self.automaton.depth(self.state);
            if horizon <= best.start {
                return None;
            }
        }

        let floor = best.end();
        self.floor = floor;
        self.pending.retain(|c| c.start >= floor);

        Some(Match {
            start: best.start_byte,
            end: best.end_byte,
            keyword: best.keyword,
        })
    }
}

impl Iterator for Matches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(m) = self.commit() {
                return Some(m);
            }
            if self.exhausted {
                return None;
            }
            match self.symbols.next() {
                Some((offset, symbol)) => self.step(offset, symbol),
                None => self.exhausted = true,
            }
        }
    }
}

impl std::iter::FusedIterator for Matches<'_> {}

impl Automaton {
    /// Scan `text`, yielding matches lazily.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> Matches<'a> {
        Matches::new(self, text)
    }

    /// Collect every match in `text`.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        self.find_iter(text).collect()
    }
}

/// Alphanumeric or underscore.
pub fn is_word_symbol(symbol: char) -> bool {
    symbol.is_alphanumeric() || symbol == '_'
}

/// True when neither neighbour of `text[start..end]` is a word symbol.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_symbol) && !after.is_some_and(is_word_symbol)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
