use std::collections::HashMap;
use std::sync::Arc;

use kakitori_types::KanjiRecord;

/// Append-only index over the dataset, keyed two ways.
///
/// Grade keys are the literal tokens "1".."6" and "S"; kanken keys are
/// "k" followed by the kanken value ("k4", "k2.5"). A record carrying both
/// attributes is reachable under both keys, shared rather than duplicated.
/// Built once per run, read-only afterwards.
#[derive(Debug, Default)]
pub struct RecordStore {
    grade_index: HashMap<String, Vec<Arc<KanjiRecord>>>,
    kanken_index: HashMap<String, Vec<Arc<KanjiRecord>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a finished record list.
    pub fn from_records(records: Vec<KanjiRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.add(Arc::new(record));
        }
        store
    }

    /// Index a record under its grade key and, if rated, its kanken key.
    ///
    /// Whatever value the grade or kanken field holds is accepted verbatim
    /// as a key; the store performs no validation.
    pub fn add(&mut self, record: Arc<KanjiRecord>) {
        self.grade_index
            .entry(record.grade.clone())
            .or_default()
            .push(Arc::clone(&record));

        if let Some(kanken) = &record.kanken {
            self.kanken_index
                .entry(kanken.clone())
                .or_default()
                .push(record);
        }
    }

    /// Records under `key`, or empty when the key is absent.
    ///
    /// A key starting with "k" addresses the kanken index (the remainder
    /// is the kanken value); anything else addresses the grade index.
    pub fn lookup(&self, key: &str) -> &[Arc<KanjiRecord>] {
        let bucket = match key.strip_prefix('k') {
            Some(value) => self.kanken_index.get(value),
            None => self.grade_index.get(key),
        };
        bucket.map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of indexed records. Every record has a grade, so the grade
    /// index alone is authoritative.
    pub fn len(&self) -> usize {
        self.grade_index.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.grade_index.is_empty()
    }
}
