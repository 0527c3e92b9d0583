//! Multi-file aggregation.
//!
//! Every file is parsed in order into a [`RecordStore`](crate::store::RecordStore),
//! which keeps the last record seen for each id. Once all files are in, the
//! store is drained, filtered by duration and command, and sorted by
//! timestamp.

mod aggregate;
mod filter;

pub use aggregate::{Aggregation, AggregationSummary, Aggregator, aggregate, sort_chronologically};
pub use filter::{DURATION_SCALE, RecordFilter};

use crate::parse::ParseOptions;

/// How a file that fails to open or parse affects the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing file and return its error.
    #[default]
    Abort,
    /// Log the failure and continue with the next file. Records the failing
    /// file produced before the error are kept.
    SkipFile,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub parse: ParseOptions,
    pub failure_policy: FailurePolicy,
}
