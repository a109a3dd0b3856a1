// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timing data structures for the --timing flag.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Phase timing breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseTiming {
    /// Automaton construction time.
    pub build_ms: u64,
    /// Scan or substitution time.
    pub scan_ms: u64,
    /// Output formatting time.
    pub output_ms: u64,
    /// Total elapsed time.
    pub total_ms: u64,
}

impl PhaseTiming {
    /// Format as text output lines for stderr.
    pub fn format_text(&self) -> String {
        format!(
            "build: {}ms\nscan: {}ms\noutput: {}ms\ntotal: {}ms",
            self.build_ms, self.scan_ms, self.output_ms, self.total_ms
        )
    }
}

/// Stopwatch collecting phase boundaries.
#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
    lap: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

impl Stopwatch {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            lap: now,
        }
    }

    /// Milliseconds since the previous lap.
    pub fn lap(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.lap);
        self.lap = now;
        millis(elapsed)
    }

    /// Milliseconds since the stopwatch started.
    pub fn total(&self) -> u64 {
        millis(self.start.elapsed())
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
