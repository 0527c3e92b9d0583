use crate::record::SlowlogRecord;
use crate::store::RecordStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

fn record(id: i64, command: &str) -> SlowlogRecord {
    SlowlogRecord {
        id,
        timestamp: 1_600_000_000 + id,
        duration_micros: 100.0,
        command: command.to_string(),
        ..Default::default()
    }
}

#[test]
fn put_keeps_one_record_per_id_last_write_wins() {
    let store = RecordStore::new();

    assert!(store.put(record(7, "GET")).is_none());
    let replaced = store.put(record(7, "SET"));

    assert_eq!(replaced.map(|r| r.command), Some("GET".to_string()));
    assert_eq!(store.values(), vec![record(7, "SET")]);
}

#[test]
fn overwrite_does_not_merge_fields() {
    let store = RecordStore::new();
    let mut first = record(1, "HGET");
    first.key = "k".to_string();
    first.parameters = vec!["f".to_string()];

    store.put(first);
    store.put(record(1, "HSET"));

    let got = store.get(1).unwrap();
    assert_eq!(got.key, "");
    assert!(got.parameters.is_empty());
}

#[test]
fn values_returns_every_distinct_id() {
    let store = RecordStore::new();
    for id in 0..10 {
        store.put(record(id, "GET"));
    }

    let mut ids: Vec<i64> = store.values().into_iter().map(|r| r.id).collect();
    ids.sort();

    assert_eq!(ids, (0..10).collect::<Vec<_>>());
    assert_eq!(store.len(), 10);
}

#[test]
fn into_values_drains_the_store() {
    let store = RecordStore::new();
    store.put(record(3, "DEL"));

    assert_eq!(store.into_values(), vec![record(3, "DEL")]);
}

#[test]
fn empty_store() {
    let store = RecordStore::default();

    assert!(store.is_empty());
    assert!(store.values().is_empty());
    assert_eq!(store.get(1), None);
}

#[test]
fn concurrent_puts_do_not_lose_updates() {
    let store = Arc::new(RecordStore::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..500 {
                    store.put(record(t * 1000 + i, "GET"));
                    if i % 50 == 0 {
                        // readers racing writers only ever see whole records
                        for r in store.values() {
                            assert_eq!(r.command, "GET");
                        }
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.len(), 8 * 500);
}

#[test]
fn concurrent_puts_to_same_id_leave_exactly_one() {
    let store = RecordStore::new();

    thread::scope(|s| {
        for t in 0..4 {
            let store = &store;
            s.spawn(move || {
                for _ in 0..100 {
                    store.put(record(42, &format!("CMD{t}")));
                }
            });
        }
    });

    assert_eq!(store.len(), 1);
    assert!(store.get(42).unwrap().command.starts_with("CMD"));
}
