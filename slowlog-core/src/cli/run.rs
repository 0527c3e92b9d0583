use crate::cli::SlowlogArgs;
use crate::cli::render::render_records;
use crate::discover::discover_log_files;
use crate::pipeline::{AggregationSummary, aggregate};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, BufWriter, IsTerminal};

pub fn run(args: &SlowlogArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    run_with(args, &mut out)?;
    Ok(())
}

/// Same as [`run`], writing records to `out`.
pub fn run_with<W: io::Write>(args: &SlowlogArgs, out: &mut W) -> Result<AggregationSummary> {
    let files = discover_log_files(&args.path)?;
    if files.is_empty() {
        tracing::warn!(path = %args.path.display(), "no slow log files found");
    }

    let aggregation = aggregate(&files, &args.filter(), args.pipeline_options())?;
    render_records(&aggregation.records, args.format, out)?;

    Ok(aggregation.summary)
}

/// Prints a fatal error to stderr, in red when stderr is a terminal.
pub fn print_error(err: &anyhow::Error) {
    if io::stderr().is_terminal() {
        eprintln!("{} {err}", "error:".red().bold());
    } else {
        eprintln!("error: {err}");
    }
}
