mod store_tests;

use std::sync::Arc;

use kakitori_types::KanjiRecord;

use crate::store::RecordStore;

fn record(kanji: &str, grade: &str, kanken: Option<&str>) -> KanjiRecord {
    KanjiRecord::new(
        kanji,
        grade,
        kanken.map(str::to_string),
        "gloss",
        vec!["よみ".to_string()],
    )
}

/// Small dataset exercising every grade and a spread of kanken levels.
///
/// Grade counts: 1 -> 2 records, 2 -> 3, 3 -> 1, 4 -> 1, 5 -> 1, 6 -> 1,
/// S -> 3. Kanken levels follow the usual grade mapping for 1..6 and
/// cover 4, 2.5 and 2 for the secondary records.
fn sample_records() -> Vec<KanjiRecord> {
    vec![
        record("一", "1", Some("10")),
        record("二", "1", Some("10")),
        record("森", "2", Some("9")),
        record("雲", "2", Some("9")),
        record("黄", "2", Some("9")),
        record("島", "3", Some("8")),
        record("芸", "4", Some("7")),
        record("墓", "5", Some("6")),
        record("蔵", "6", Some("5")),
        record("誰", "S", Some("4")),
        record("曖", "S", Some("2.5")),
        record("鬱", "S", Some("2")),
    ]
}

fn sample_store() -> RecordStore {
    RecordStore::from_records(sample_records())
}

/// Result sets are order-irrelevant; compare as sorted glyph lists.
fn glyphs(records: &[Arc<KanjiRecord>]) -> Vec<String> {
    let mut out: Vec<String> = records.iter().map(|r| r.kanji.clone()).collect();
    out.sort();
    out
}
