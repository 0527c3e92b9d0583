use crate::error::SlowlogError;
use crate::parse::{BlockParser, parse_file};
use crate::pipeline::{FailurePolicy, PipelineOptions, RecordFilter};
use crate::record::SlowlogRecord;
use crate::store::RecordStore;
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    /// Records emitted by the parser, duplicates included.
    pub records_parsed: usize,
    /// Distinct ids after deduplication.
    pub unique: usize,
    /// Records left after filtering.
    pub kept: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub records: Vec<SlowlogRecord>,
    pub summary: AggregationSummary,
}

/// Accumulates records from any number of inputs into a deduplicating store.
#[derive(Debug, Default)]
pub struct Aggregator {
    store: RecordStore,
    options: PipelineOptions,
    summary: AggregationSummary,
}

impl Aggregator {
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            store: RecordStore::new(),
            options,
            summary: AggregationSummary::default(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn summary(&self) -> &AggregationSummary {
        &self.summary
    }

    /// Ingests every path in order, applying the configured failure policy.
    pub fn ingest_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<(), SlowlogError> {
        for path in paths {
            let path = path.as_ref();

            match self.ingest_file(path) {
                Ok(records) => {
                    tracing::info!(path = %path.display(), records, "scanned slow log");
                }
                Err(err) => match self.options.failure_policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::SkipFile => {
                        tracing::warn!(path = %path.display(), error = %err, "skipping slow log");
                        self.summary.files_skipped += 1;
                    }
                },
            }
        }

        Ok(())
    }

    /// Parses one file into the store. Returns the number of records it emitted.
    pub fn ingest_file(&mut self, path: &Path) -> Result<usize, SlowlogError> {
        self.summary.files_scanned += 1;
        let parser = parse_file(path, self.options.parse)?;
        self.ingest(parser)
    }

    /// Drains a parser into the store. Records yielded before an error stay stored.
    pub fn ingest<R: BufRead>(&mut self, parser: BlockParser<R>) -> Result<usize, SlowlogError> {
        let mut emitted = 0;

        for record in parser {
            self.store.put(record?);
            emitted += 1;
            self.summary.records_parsed += 1;
        }

        Ok(emitted)
    }

    /// Filters and sorts everything ingested so far.
    pub fn finish(self, filter: &RecordFilter) -> Aggregation {
        let mut summary = self.summary;
        summary.unique = self.store.len();

        let mut records = filter.apply(self.store.into_values());
        sort_chronologically(&mut records);
        summary.kept = records.len();

        tracing::info!(
            files_scanned = summary.files_scanned,
            files_skipped = summary.files_skipped,
            records_parsed = summary.records_parsed,
            unique = summary.unique,
            kept = summary.kept,
            "slow log aggregation finished"
        );

        Aggregation { records, summary }
    }
}

/// Stable sort by timestamp, oldest first.
pub fn sort_chronologically(records: &mut [SlowlogRecord]) {
    records.sort_by_key(|r| r.timestamp);
}

/// Parses `paths` in order, deduplicates by id, filters and sorts.
pub fn aggregate<P: AsRef<Path>>(
    paths: &[P],
    filter: &RecordFilter,
    options: PipelineOptions,
) -> Result<Aggregation, SlowlogError> {
    let mut aggregator = Aggregator::new(options);
    aggregator.ingest_paths(paths)?;
    Ok(aggregator.finish(filter))
}
