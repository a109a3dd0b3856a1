// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass multi-keyword search and substitution.
//!
//! A keyword set compiles into an Aho–Corasick automaton once; every scan
//! then walks the text a single time and commits non-overlapping matches
//! leftmost-longest.

pub mod api;
pub mod automaton;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod keyword;
pub mod output;
pub mod reader;
pub mod registry;
pub mod report;
pub mod scan;
pub mod session;
pub mod subst;
pub mod timing;

pub use automaton::{Automaton, SearchOptions};
pub use cli::{Cli, Command, MatchArgs, OutputFormat, SubstArgs};
pub use error::{Error, ExitCode, Result};
pub use keyword::{Keyword, KeywordId, KeywordSet};
pub use registry::{Handle, Registry};
pub use report::{LineMatch, Report, ReportMode};
pub use scan::Match;
pub use session::Session;

#[cfg(test)]
pub mod test_utils;
