use serde::{Deserialize, Serialize};

/// One entry of the joyo character set.
///
/// Records are created during ingestion and never mutated afterwards;
/// kanken rating, when requested, runs before the index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiRecord {
    /// The glyph, possibly followed by a space and a footnote marker.
    pub kanji: String,
    /// School grade token: "1".."6" or "S".
    pub grade: String,
    /// Kanken exam level token ("1", "1.5", "2", "2.5", .. "10"), if rated.
    pub kanken: Option<String>,
    /// English gloss.
    pub english: String,
    /// Readings, at least one.
    pub readings: Vec<String>,
}

impl KanjiRecord {
    pub fn new(
        kanji: impl Into<String>,
        grade: impl Into<String>,
        kanken: Option<String>,
        english: impl Into<String>,
        readings: Vec<String>,
    ) -> Self {
        Self {
            kanji: kanji.into(),
            grade: grade.into(),
            kanken,
            english: english.into(),
            readings,
        }
    }

    /// The glyph with any footnote marker removed.
    pub fn glyph(&self) -> &str {
        self.kanji.split(' ').next().unwrap_or(&self.kanji)
    }
}
