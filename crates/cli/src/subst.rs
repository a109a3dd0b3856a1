// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming substitution over the match sequence.

use crate::automaton::Automaton;
use crate::keyword::KeywordSet;
use crate::scan::Match;

/// Replace every match in `text` with its keyword's replacement.
///
/// Detect-only keywords copy the matched text through. Unmatched regions are
/// copied verbatim. Replacements are not rescanned.
pub fn substitute(automaton: &Automaton, keywords: &KeywordSet, text: &str) -> String {
    substitute_with(automaton, text, |m, matched, out| {
        let replacement = keywords.get(m.keyword).and_then(|k| k.replacement());
        out.push_str(replacement.unwrap_or(matched));
    })
}

/// Replace every match with whatever `replacer` appends for it.
///
/// `replacer` receives the match, the matched slice of `text` and the output
/// buffer built so far.
pub fn substitute_with<F>(automaton: &Automaton, text: &str, mut replacer: F) -> String
where
    F: FnMut(&Match, &str, &mut String),
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for m in automaton.find_iter(text) {
        out.push_str(&text[cursor..m.start]);
        replacer(&m, &text[m.span()], &mut out);
        cursor = m.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
#[path = "subst_tests.rs"]
mod tests;
