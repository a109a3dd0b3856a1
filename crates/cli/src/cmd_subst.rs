// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subst command implementation.

use std::io::Write;

use rayon::prelude::*;

use textsearch::api;
use textsearch::cli::{Cli, SubstArgs};
use textsearch::error::ExitCode;
use textsearch::reader::{Input, InputReader};
use textsearch::timing::{PhaseTiming, Stopwatch};

/// Run the subst command.
pub fn run(cli: &Cli, args: &SubstArgs) -> anyhow::Result<ExitCode> {
    let mut watch = Stopwatch::start();
    let (handle, _keywords) = crate::open_session(cli, &args.keywords)?;
    let build_ms = watch.lap();

    let inputs = Input::from_args(&args.paths);
    let reader = InputReader::new();
    let rewritten: textsearch::Result<Vec<String>> = inputs
        .par_iter()
        .map(|input| -> textsearch::Result<String> {
            let text = reader.read(input)?;
            api::subst(handle, &text)
        })
        .collect();
    api::free(handle)?;
    let rewritten = rewritten?;
    let scan_ms = watch.lap();

    let mut stdout = std::io::stdout().lock();
    for text in &rewritten {
        stdout.write_all(text.as_bytes())?;
    }
    stdout.flush()?;
    let output_ms = watch.lap();

    if args.keywords.timing {
        let timing = PhaseTiming {
            build_ms,
            scan_ms,
            output_ms,
            total_ms: watch.total(),
        };
        eprintln!("{}", timing.format_text());
    }

    Ok(ExitCode::Success)
}
