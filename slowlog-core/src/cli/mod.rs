//! Command-line surface.
//!
//! The binary parses [`SlowlogArgs`] and hands them to [`run`], which wires
//! discovery, aggregation and rendering together:
//!
//! path
//! discover_log_files
//! aggregate (parse → dedup → filter → sort)
//! render_records
//! stdout
//!

mod render;
mod run;

pub use render::render_records;
pub use run::{print_error, run, run_with};

use crate::parse::{ParseOptions, TrailingBlock};
use crate::pipeline::{FailurePolicy, PipelineOptions, RecordFilter};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per record
    #[default]
    Text,
    /// One JSON object per line, parameters included
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct SlowlogArgs {
    /// Slow log file or directory path
    #[arg(short = 's', long = "slowlog", value_name = "PATH")]
    pub path: PathBuf,

    /// Slow query duration threshold; records must take longer than
    /// THRESHOLD × 1000 microseconds
    #[arg(short, long, value_name = "THRESHOLD", default_value_t = 0.0)]
    pub duration: f64,

    /// Only show this Redis command (exact, case-sensitive)
    #[arg(short, long, value_name = "NAME")]
    pub command: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip unreadable or malformed files instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Never emit the last block of a file
    #[arg(long)]
    pub drop_trailing_block: bool,
}

impl SlowlogArgs {
    pub fn filter(&self) -> RecordFilter {
        RecordFilter::new(self.duration, self.command.clone())
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            parse: ParseOptions {
                trailing_block: if self.drop_trailing_block {
                    TrailingBlock::Drop
                } else {
                    TrailingBlock::Flush
                },
            },
            failure_policy: if self.keep_going {
                FailurePolicy::SkipFile
            } else {
                FailurePolicy::Abort
            },
        }
    }
}
