// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide session operations.
//!
//! A thin layer over one shared [`Registry`]: create a session from
//! `(pattern, replacement)` pairs, substitute or match text through it, and
//! free it. Every operation is safe to call from any thread.

use std::sync::LazyLock;

use crate::automaton::SearchOptions;
use crate::error::Result;
use crate::keyword::KeywordSet;
use crate::registry::{Handle, Registry};
use crate::report::{Report, ReportMode};

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Create a session with default search options.
///
/// A `None` replacement makes the keyword detect-only.
pub fn init<I, P>(keywords: I) -> Result<Handle>
where
    I: IntoIterator<Item = (P, Option<String>)>,
    P: Into<String>,
{
    init_with_options(keywords, SearchOptions::default())
}

pub fn init_with_options<I, P>(keywords: I, options: SearchOptions) -> Result<Handle>
where
    I: IntoIterator<Item = (P, Option<String>)>,
    P: Into<String>,
{
    REGISTRY.open(KeywordSet::new(keywords)?, options)
}

/// Replace every committed match with its keyword's replacement.
pub fn subst(handle: Handle, text: &str) -> Result<String> {
    REGISTRY.substitute(handle, text)
}

/// Report matches in `text`.
///
/// `mode` is `""` for whole-text offsets or `"l"` for line reports; any
/// other value is a validation error.
pub fn match_text(handle: Handle, text: &str, mode: &str) -> Result<Report> {
    let mode: ReportMode = mode.parse()?;
    REGISTRY.find(handle, text, mode)
}

/// Release a session. The handle is invalid afterwards.
pub fn free(handle: Handle) -> Result<()> {
    REGISTRY.close(handle)
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
