// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Textsearch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use textsearch::api;
use textsearch::cli::{Cli, Command, KeywordArgs};
use textsearch::discovery;
use textsearch::error::ExitCode;
use textsearch::keyword::Keyword;
use textsearch::registry::Handle;

mod cmd_match;
mod cmd_subst;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TEXTSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("textsearch: {}", e);
            match e.downcast_ref::<textsearch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Match(args)) => cmd_match::run(&cli, args),
        Some(Command::Subst(args)) => cmd_subst::run(&cli, args),
    }
}

/// Merge config and command-line keywords and open a session.
///
/// Returns the handle with the keyword list whose positions are the ids.
fn open_session(cli: &Cli, args: &KeywordArgs) -> anyhow::Result<(Handle, Vec<Keyword>)> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    let keywords = config.keywords(&args.keywords);
    if keywords.is_empty() {
        return Err(textsearch::Error::Argument(
            "no keywords given (pass -k or add [[keywords]] to textsearch.toml)".into(),
        )
        .into());
    }

    let options = config.options(args.ignore_case, args.word_boundaries);
    let handle = api::init_with_options(
        keywords.iter().cloned().map(Keyword::into_parts),
        options,
    )?;
    Ok((handle, keywords))
}
