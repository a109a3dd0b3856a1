// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled multi-pattern matcher.
//!
//! A trie over pattern symbols with failure links and aggregated output sets,
//! frozen into flat tables after construction:
//! - `states`: one record per trie node, node 0 is the root
//! - `edges`: every node's outgoing transitions, contiguous and sorted by symbol
//! - `outputs`: every node's output set (own keywords plus those inherited
//!   through failure links), contiguous per node
//!
//! The tables never change once built, so one automaton can be scanned from
//! many threads at once.

mod builder;

use serde::Deserialize;

use crate::error::Result;
use crate::keyword::{KeywordId, KeywordSet};

/// Matching options fixed at build time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Fold patterns and text to lowercase before matching.
    pub case_insensitive: bool,

    /// Only accept matches not flanked by word symbols.
    pub word_boundaries: bool,
}

/// Index of a node in the automaton's state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    pub const ROOT: StateId = StateId(0);

    /// Sentinel for an absent transition in the dense root table.
    const NONE: StateId = StateId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// One trie node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct State {
    /// Longest proper suffix of this node's path that is also a node.
    fail: u32,
    /// Length in symbols of the path from the root.
    depth: u32,
    /// Range into `edges`.
    edges_start: u32,
    edges_end: u32,
    /// Range into `outputs`.
    outputs_start: u32,
    outputs_end: u32,
}

/// Transitions at or below this count are searched linearly.
const LINEAR_EDGE_LIMIT: usize = 8;

/// Number of root transitions kept in a dense table (ASCII).
const ROOT_DENSE: usize = 128;

/// Immutable Aho-Corasick automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    edges: Vec<(char, StateId)>,
    outputs: Vec<KeywordId>,
    root_dense: Vec<StateId>,
    /// Pattern length in symbols, indexed by keyword id.
    pattern_lens: Vec<u32>,
    max_pattern_len: usize,
    options: SearchOptions,
}

impl Automaton {
    /// Compile a keyword set.
    ///
    /// An empty set yields an automaton that never matches.
    pub fn build(keywords: &KeywordSet, options: SearchOptions) -> Result<Self> {
        builder::build(keywords, options)
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Number of trie nodes, including the root.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.edges.len()
    }

    /// True when no keyword was compiled in.
    pub fn is_empty(&self) -> bool {
        self.pattern_lens.is_empty()
    }

    /// Longest pattern, in symbols.
    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// Length of a keyword's pattern in symbols.
    #[inline]
    pub fn pattern_len(&self, id: KeywordId) -> usize {
        self.pattern_lens[id.index()] as usize
    }

    #[inline]
    pub fn depth(&self, state: StateId) -> usize {
        self.states[state.index()].depth as usize
    }

    #[inline]
    pub fn fail(&self, state: StateId) -> StateId {
        StateId(self.states[state.index()].fail)
    }

    /// Keywords whose pattern is a suffix of the path to `state`.
    #[inline]
    pub fn outputs(&self, state: StateId) -> &[KeywordId] {
        let s = &self.states[state.index()];
        &self.outputs[s.outputs_start as usize..s.outputs_end as usize]
    }

    /// Map a text or pattern symbol into the automaton's alphabet.
    #[inline]
    pub fn fold(&self, symbol: char) -> char {
        if self.options.case_insensitive {
            fold_case(symbol)
        } else {
            symbol
        }
    }

    /// Direct trie transition, without failure links.
    #[inline]
    pub fn goto(&self, state: StateId, symbol: char) -> Option<StateId> {
        if state == StateId::ROOT && (symbol as usize) < ROOT_DENSE {
            let next = self.root_dense[symbol as usize];
            return (!next.is_none()).then_some(next);
        }
        let s = &self.states[state.index()];
        let edges = &self.edges[s.edges_start as usize..s.edges_end as usize];
        if edges.len() <= LINEAR_EDGE_LIMIT {
            edges.iter().find(|(c, _)| *c == symbol).map(|&(_, next)| next)
        } else {
            edges
                .binary_search_by_key(&symbol, |&(c, _)| c)
                .ok()
                .map(|i| edges[i].1)
        }
    }

    /// Advance on an already folded symbol, following failure links on a miss.
    #[inline]
    pub fn next_state(&self, mut state: StateId, symbol: char) -> StateId {
        loop {
            if let Some(next) = self.goto(state, symbol) {
                return next;
            }
            if state == StateId::ROOT {
                return StateId::ROOT;
            }
            state = self.fail(state);
        }
    }
}

/// Simple per-symbol lowercase; multi-symbol mappings are left alone.
pub fn fold_case(symbol: char) -> char {
    if symbol.is_ascii() {
        return symbol.to_ascii_lowercase();
    }
    let mut lower = symbol.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => symbol,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
