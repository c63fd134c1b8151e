use std::collections::HashSet;

use kakitori_types::KanjiRecord;
use tracing::debug;

/// Stamps kanken exam levels onto records.
///
/// Grades 1 through 6 map directly: grade 1 is kanken 10 (easiest taught
/// first), down to grade 6 as kanken 5. Secondary-grade records are
/// matched against the exam lists for levels 4, 3 and 2.5; a secondary
/// glyph on none of those lists is level 2. Records with any other grade
/// value are left untouched.
pub struct KankenRater {
    kanken4: HashSet<String>,
    kanken3: HashSet<String>,
    kanken2_5: HashSet<String>,
}

impl KankenRater {
    pub fn new(
        kanken4: HashSet<String>,
        kanken3: HashSet<String>,
        kanken2_5: HashSet<String>,
    ) -> Self {
        Self {
            kanken4,
            kanken3,
            kanken2_5,
        }
    }

    /// Rate every record in place. Existing ratings are overwritten.
    pub fn apply(&self, records: &mut [KanjiRecord]) {
        let mut rated = 0usize;
        for record in records.iter_mut() {
            if let Some(level) = self.rate(record) {
                record.kanken = Some(level.to_string());
                rated += 1;
            }
        }
        debug!(rated, total = records.len(), "kanken rating applied");
    }

    fn rate(&self, record: &KanjiRecord) -> Option<&'static str> {
        match record.grade.as_str() {
            "1" => Some("10"),
            "2" => Some("9"),
            "3" => Some("8"),
            "4" => Some("7"),
            "5" => Some("6"),
            "6" => Some("5"),
            // Footnote markers never appear on the exam lists, so match
            // the bare glyph.
            "S" => {
                let glyph = record.glyph();
                if self.kanken4.contains(glyph) {
                    Some("4")
                } else if self.kanken3.contains(glyph) {
                    Some("3")
                } else if self.kanken2_5.contains(glyph) {
                    Some("2.5")
                } else {
                    Some("2")
                }
            }
            _ => None,
        }
    }
}
