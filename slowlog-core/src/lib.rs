pub mod cli;
pub mod discover;
pub mod error;
pub mod logging;
pub mod parse;
pub mod pipeline;
pub mod record;
pub mod store;

pub use error::{HeaderField, SlowlogError};
pub use parse::{BlockParser, ParseOptions, TrailingBlock, parse_file, parse_reader};
pub use pipeline::{
    Aggregation, AggregationSummary, Aggregator, FailurePolicy, PipelineOptions, RecordFilter,
    aggregate,
};
pub use record::SlowlogRecord;
pub use store::RecordStore;
