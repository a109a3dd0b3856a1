// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::keyword::Keyword;

/// Multi-keyword search and replace over text
#[derive(Parser)]
#[command(name = "textsearch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TEXTSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report keyword occurrences
    Match(MatchArgs),
    /// Replace keyword occurrences with their replacements
    Subst(SubstArgs),
}

/// Keyword and matching flags shared by every command.
#[derive(clap::Args, Default)]
pub struct KeywordArgs {
    /// Keyword to search for, with an optional replacement (repeatable)
    #[arg(
        short = 'k',
        long = "keyword",
        value_name = "PATTERN[=REPLACEMENT]",
        value_parser = Keyword::parse_arg
    )]
    pub keywords: Vec<Keyword>,

    /// Match without regard to letter case
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Only match whole words
    #[arg(short = 'w', long)]
    pub word_boundaries: bool,

    /// Print phase timings
    #[arg(long)]
    pub timing: bool,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Files to search (stdin when absent or `-`)
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Report line number and line content instead of offsets
    #[arg(short = 'l', long)]
    pub lines: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Maximum matches to display in text output
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl MatchArgs {
    /// Mode string understood by [`crate::api::match_text`].
    pub fn mode(&self) -> &'static str {
        if self.lines { "l" } else { "" }
    }
}

#[derive(clap::Args)]
pub struct SubstArgs {
    /// Files to rewrite to stdout (stdin when absent or `-`)
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub keywords: KeywordArgs,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
