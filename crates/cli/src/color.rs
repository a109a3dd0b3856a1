// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. otherwise color only when stdout is a terminal

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve the color choice for stdout.
pub fn resolve_color() -> ColorChoice {
    resolve_color_with(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

fn resolve_color_with(no_color: bool, color: bool, terminal: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if color {
        ColorChoice::Always
    } else if terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Color specs for match output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Input path: cyan.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Line number or offset: yellow.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Matched span: bold red.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Keyword label: dimmed.
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
