use std::sync::Arc;

use super::{record, sample_store};
use crate::store::RecordStore;

#[test]
fn record_is_reachable_under_its_grade_key() {
    let store = sample_store();
    assert_eq!(store.lookup("3").len(), 1);
    assert_eq!(store.lookup("3")[0].kanji, "島");
}

#[test]
fn rated_record_is_reachable_under_both_keys() {
    let store = sample_store();
    let by_grade = store.lookup("3");
    let by_kanken = store.lookup("k8");
    assert_eq!(by_grade.len(), 1);
    assert_eq!(by_kanken.len(), 1);
    // Same allocation, not a copy.
    assert!(Arc::ptr_eq(&by_grade[0], &by_kanken[0]));
}

#[test]
fn unrated_record_has_no_kanken_key() {
    let mut store = RecordStore::new();
    store.add(Arc::new(record("白", "1", None)));
    assert_eq!(store.lookup("1").len(), 1);
    assert!(store.lookup("k10").is_empty());
}

#[test]
fn absent_key_yields_empty() {
    let store = sample_store();
    assert!(store.lookup("9").is_empty());
    assert!(store.lookup("k1.5").is_empty());
    assert!(store.lookup("nonsense").is_empty());
}

#[test]
fn unrecognized_attribute_values_are_keyed_verbatim() {
    // The store does no validation; garbage grades become garbage keys.
    let mut store = RecordStore::new();
    store.add(Arc::new(record("変", "weird", Some("zz"))));
    assert_eq!(store.lookup("weird").len(), 1);
    assert_eq!(store.lookup("kzz").len(), 1);
}

#[test]
fn len_counts_every_added_record_once() {
    let store = sample_store();
    assert_eq!(store.len(), 12);
    assert!(!store.is_empty());
    assert!(RecordStore::new().is_empty());
}
