// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for match results.

pub mod json;
pub mod text;

use crate::reader::Input;
use crate::report::Report;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Maximum matches to show (None = unlimited).
    pub limit: Option<usize>,

    /// Prefix each line with the input name.
    pub show_paths: bool,
}

impl FormatOptions {
    /// Create options with a specific limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// The report for one input, with the text it was computed from.
#[derive(Debug)]
pub struct InputReport {
    pub input: Input,
    pub text: String,
    pub report: Report,
}

impl InputReport {
    /// Total matches across a set of reports.
    pub fn total(reports: &[InputReport]) -> usize {
        reports.iter().map(|r| r.report.len()).sum()
    }
}
