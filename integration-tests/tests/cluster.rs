use integration_tests::harness::fixture;
use pretty_assertions::assert_eq;
use slowlog_core::discover::discover_log_files;
use slowlog_core::{
    ParseOptions, PipelineOptions, RecordFilter, SlowlogRecord, TrailingBlock, aggregate,
};

fn ids(records: &[SlowlogRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

fn cluster(filter: RecordFilter, options: PipelineOptions) -> Vec<SlowlogRecord> {
    let files = discover_log_files(&fixture("cluster")).unwrap();
    aggregate(&files, &filter, options).unwrap().records
}

/// Only the two node dumps are scanned; hidden dirs and non-.log files are skipped
#[test]
fn discovery_finds_node_dumps_only() {
    let files = discover_log_files(&fixture("cluster")).unwrap();

    assert_eq!(
        files,
        vec![
            fixture("cluster/node-a/slowlog.log"),
            fixture("cluster/node-b/slowlog.log"),
        ]
    );
}

/// Overlapping dumps collapse to one record per id, oldest first
#[test]
fn records_are_deduplicated_and_chronological() {
    let records = cluster(RecordFilter::default(), PipelineOptions::default());

    assert_eq!(ids(&records), vec![9, 10, 11, 12]);
    assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn tail_lines_are_split_into_key_and_parameters() {
    let records = cluster(RecordFilter::default(), PipelineOptions::default());
    let set = records.iter().find(|r| r.id == 11).unwrap();

    assert_eq!(set.command, "SET");
    assert_eq!(set.key, "session:abc");
    assert_eq!(
        set.parameters,
        vec!["{\"uid\":1001}", "EX", "3600", "10.0.0.7:40112", "api"]
    );
}

#[test]
fn empty_client_name_is_kept_as_parameter() {
    let records = cluster(RecordFilter::default(), PipelineOptions::default());
    let hgetall = records.iter().find(|r| r.id == 12).unwrap();

    assert_eq!(hgetall.parameters, vec!["10.0.0.5:51234", ""]);
}

#[test]
fn duration_threshold_excludes_fast_queries() {
    let records = cluster(RecordFilter::new(1.0, None), PipelineOptions::default());

    // id 9 took 980µs, below 1.0 × 1000
    assert_eq!(ids(&records), vec![10, 11, 12]);
}

#[test]
fn threshold_equal_to_duration_is_excluded() {
    let records = cluster(RecordFilter::new(1.8, None), PipelineOptions::default());

    // id 11 took exactly 1800µs
    assert_eq!(ids(&records), vec![10, 12]);
}

#[test]
fn command_filter_is_exact() {
    let keys = cluster(
        RecordFilter::new(0.0, Some("KEYS".to_string())),
        PipelineOptions::default(),
    );
    let lower = cluster(
        RecordFilter::new(0.0, Some("keys".to_string())),
        PipelineOptions::default(),
    );

    assert_eq!(ids(&keys), vec![10]);
    assert!(lower.is_empty());
}

/// Dropping each file's last block loses 10 on node-a and 9 on node-b;
/// node-b still contributes 10
#[test]
fn drop_trailing_block_matches_legacy_output() {
    let options = PipelineOptions {
        parse: ParseOptions {
            trailing_block: TrailingBlock::Drop,
        },
        ..Default::default()
    };

    let records = cluster(RecordFilter::default(), options);

    assert_eq!(ids(&records), vec![10, 11, 12]);
}
