// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-phase automaton construction.
//!
//! Phase 1 inserts every pattern into a trie keyed by `(parent, symbol)` and
//! freezes it into sorted, contiguous edge ranges. Phase 2 walks the trie
//! breadth-first to set failure links and fold each node's output set
//! together with its failure node's, so every node lists all keywords that
//! end at it.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::collections::hash_map::Entry;

use super::{Automaton, ROOT_DENSE, SearchOptions, State, StateId, fold_case};
use crate::error::{Error, Result};
use crate::keyword::{KeywordId, KeywordSet};

/// Mutable trie used only during phase 1.
struct Trie {
    children: HashMap<(u32, char), u32>,
    depths: Vec<u32>,
    /// (node, keyword) for every pattern's terminal node.
    terminals: Vec<(u32, KeywordId)>,
    pattern_lens: Vec<u32>,
}

impl Trie {
    fn with_capacity(symbols: usize, keywords: usize) -> Self {
        let mut depths = Vec::with_capacity(symbols + 1);
        depths.push(0);
        Self {
            children: HashMap::with_capacity(symbols),
            depths,
            terminals: Vec::with_capacity(keywords),
            pattern_lens: Vec::with_capacity(keywords),
        }
    }

    fn insert(&mut self, id: KeywordId, pattern: &str, options: SearchOptions) -> Result<()> {
        let mut node = 0u32;
        let mut len = 0u32;
        for symbol in pattern.chars() {
            let symbol = if options.case_insensitive {
                fold_case(symbol)
            } else {
                symbol
            };
            len += 1;
            node = match self.children.entry((node, symbol)) {
                Entry::Occupied(e) => *e.get(),
                Entry::Vacant(e) => {
                    let next = to_u32(self.depths.len(), "state table")?;
                    if next == u32::MAX {
                        return Err(overflow("state table"));
                    }
                    self.depths.push(len);
                    e.insert(next);
                    next
                }
            };
        }
        self.terminals.push((node, id));
        self.pattern_lens.push(len);
        Ok(())
    }
}

pub(super) fn build(keywords: &KeywordSet, options: SearchOptions) -> Result<Automaton> {
    let mut trie = Trie::with_capacity(keywords.total_symbols(), keywords.len());
    for (id, keyword) in keywords.iter() {
        trie.insert(id, keyword.pattern(), options)?;
    }

    let Trie {
        children,
        depths,
        mut terminals,
        pattern_lens,
    } = trie;

    let mut automaton = freeze(children, &depths, pattern_lens, options);
    terminals.sort_unstable();
    link_failures(&mut automaton, &terminals)?;

    tracing::debug!(
        keywords = keywords.len(),
        states = automaton.states.len(),
        transitions = automaton.edges.len(),
        outputs = automaton.outputs.len(),
        "built automaton"
    );

    Ok(automaton)
}

/// Lay out the trie as flat tables. Failure links and outputs are left unset.
fn freeze(
    children: HashMap<(u32, char), u32>,
    depths: &[u32],
    pattern_lens: Vec<u32>,
    options: SearchOptions,
) -> Automaton {
    let mut sorted: Vec<(u32, char, u32)> = children
        .into_iter()
        .map(|((parent, symbol), child)| (parent, symbol, child))
        .collect();
    sorted.sort_unstable();

    let mut states = vec![State::default(); depths.len()];
    let mut cursor = 0usize;
    for (idx, state) in states.iter_mut().enumerate() {
        state.depth = depths[idx];
        state.edges_start = cursor as u32;
        while cursor < sorted.len() && sorted[cursor].0 as usize == idx {
            cursor += 1;
        }
        state.edges_end = cursor as u32;
    }

    let mut root_dense = vec![StateId::NONE; ROOT_DENSE];
    let edges: Vec<(char, StateId)> = sorted
        .into_iter()
        .map(|(parent, symbol, child)| {
            if parent == 0 && (symbol as usize) < ROOT_DENSE {
                root_dense[symbol as usize] = StateId(child);
            }
            (symbol, StateId(child))
        })
        .collect();

    let max_pattern_len = pattern_lens.iter().copied().max().unwrap_or(0) as usize;

    Automaton {
        states,
        edges,
        outputs: Vec::new(),
        root_dense,
        pattern_lens,
        max_pattern_len,
        options,
    }
}

/// Breadth-first failure links and output aggregation.
///
/// `terminals` must be sorted by node.
fn link_failures(automaton: &mut Automaton, terminals: &[(u32, KeywordId)]) -> Result<()> {
    let n = automaton.states.len();
    let mut order = Vec::with_capacity(n);
    let mut queue = VecDeque::with_capacity(n);
    queue.push_back(StateId::ROOT);

    while let Some(state) = queue.pop_front() {
        order.push(state);
        let s = automaton.states[state.index()];
        for i in s.edges_start as usize..s.edges_end as usize {
            let (symbol, child) = automaton.edges[i];
            let fail = if state == StateId::ROOT {
                StateId::ROOT
            } else {
                automaton.next_state(automaton.fail(state), symbol)
            };
            automaton.states[child.index()].fail = fail.0;
            queue.push_back(child);
        }
    }

    // Own outputs per node, as ranges into the sorted terminal list.
    let mut own = vec![(0usize, 0usize); n];
    let mut cursor = 0usize;
    while cursor < terminals.len() {
        let node = terminals[cursor].0 as usize;
        let start = cursor;
        while cursor < terminals.len() && terminals[cursor].0 as usize == node {
            cursor += 1;
        }
        own[node] = (start, cursor);
    }

    // A node's failure target is shallower, so it is finalized earlier in BFS order.
    let mut outputs: Vec<KeywordId> = Vec::with_capacity(terminals.len());
    for state in order {
        let start = outputs.len();
        let (own_start, own_end) = own[state.index()];
        outputs.extend(terminals[own_start..own_end].iter().map(|&(_, id)| id));
        if state != StateId::ROOT {
            let fail = automaton.states[automaton.fail(state).index()];
            outputs.extend_from_within(fail.outputs_start as usize..fail.outputs_end as usize);
        }
        let entry = &mut automaton.states[state.index()];
        entry.outputs_start = to_u32(start, "output table")?;
        entry.outputs_end = to_u32(outputs.len(), "output table")?;
    }
    automaton.outputs = outputs;

    Ok(())
}

fn to_u32(value: usize, table: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| overflow(table))
}

fn overflow(table: &str) -> Error {
    Error::Validation(format!("keyword set too large: {table} overflow"))
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
