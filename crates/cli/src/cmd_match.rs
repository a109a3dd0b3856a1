// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use rayon::prelude::*;

use textsearch::api;
use textsearch::cli::{Cli, MatchArgs, OutputFormat};
use textsearch::color::resolve_color;
use textsearch::error::ExitCode;
use textsearch::output::json::JsonFormatter;
use textsearch::output::text::TextFormatter;
use textsearch::output::{FormatOptions, InputReport};
use textsearch::reader::{Input, InputReader};
use textsearch::timing::{PhaseTiming, Stopwatch};

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let mut watch = Stopwatch::start();
    let (handle, keywords) = crate::open_session(cli, &args.keywords)?;
    let build_ms = watch.lap();

    let inputs = Input::from_args(&args.paths);
    let reader = InputReader::new();
    let scanned: textsearch::Result<Vec<InputReport>> = inputs
        .into_par_iter()
        .map(|input| -> textsearch::Result<InputReport> {
            let text = reader.read(&input)?;
            let report = api::match_text(handle, &text, args.mode())?;
            Ok(InputReport {
                input,
                text,
                report,
            })
        })
        .collect();
    api::free(handle)?;
    let reports = scanned?;
    let scan_ms = watch.lap();

    let total = InputReport::total(&reports);
    tracing::debug!(inputs = reports.len(), total, "scan complete");

    let mut timing = PhaseTiming {
        build_ms,
        scan_ms,
        ..PhaseTiming::default()
    };

    match args.output {
        OutputFormat::Text => {
            let options = FormatOptions {
                limit: args.limit,
                show_paths: reports.len() > 1,
            };
            let mut formatter = TextFormatter::stdout(resolve_color(), options);
            for report in &reports {
                if formatter.write_input(report, &keywords)? {
                    break;
                }
            }
            if formatter.was_truncated() {
                tracing::debug!(shown = formatter.matches_shown(), total, "output truncated");
                formatter.write_truncation_message(total)?;
            }
            timing.output_ms = watch.lap();
            timing.total_ms = watch.total();
            if args.keywords.timing {
                eprintln!("{}", timing.format_text());
            }
        }
        OutputFormat::Json => {
            let timing = args.keywords.timing.then(|| PhaseTiming {
                total_ms: watch.total(),
                ..timing
            });
            JsonFormatter::new(std::io::stdout().lock()).write(
                &reports,
                &keywords,
                timing.as_ref(),
            )?;
        }
    }

    Ok(if total == 0 {
        ExitCode::NoMatches
    } else {
        ExitCode::Success
    })
}
