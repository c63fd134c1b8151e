use std::collections::HashSet;
use std::fs;
use std::path::Path;

use kakitori_types::KanjiRecord;
use tracing::warn;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the clean dataset CSV: `kanji,grade,kanken,english,readings`.
///
/// The readings field is itself comma-joined and therefore arrives
/// double-quoted. Rows with fewer than five fields are skipped with a
/// warning; the store downstream does no validation of its own, so
/// ingestion stays deliberately lenient.
pub fn load_dataset(path: &Path) -> Result<Vec<KanjiRecord>, LoadError> {
    let content = fs::read_to_string(path)?;
    let mut records = Vec::new();

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_csv_line(line);
        if fields.len() < 5 {
            warn!(line = number + 1, "skipping short dataset row");
            continue;
        }

        let kanken = if fields[2].is_empty() {
            None
        } else {
            Some(fields[2].clone())
        };
        let readings = fields[4].split(',').map(normalize).collect();

        records.push(KanjiRecord {
            kanji: normalize(&fields[0]),
            grade: fields[1].clone(),
            kanken,
            english: normalize(&fields[3]),
            readings,
        });
    }

    Ok(records)
}

/// Load a kanken exam list: one glyph in the first CSV field per line.
pub fn load_kanken_list(path: &Path) -> Result<HashSet<String>, LoadError> {
    let content = fs::read_to_string(path)?;
    let mut glyphs = HashSet::new();

    for line in content.lines() {
        if let Some(glyph) = split_csv_line(line).into_iter().next() {
            if !glyph.is_empty() {
                glyphs.insert(normalize(&glyph));
            }
        }
    }

    Ok(glyphs)
}

/// NFKC normalization of an ingested text field.
fn normalize(text: &str) -> String {
    text.trim().nfkc().collect()
}

/// Minimal CSV field splitter: handles double-quoted fields with `""`
/// escapes, which is how the readings column is written.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn splits_plain_fields() {
        assert_eq!(split_csv_line("一,1,10,one,イチ"), ["一", "1", "10", "one", "イチ"]);
    }

    #[test]
    fn splits_quoted_readings_field() {
        assert_eq!(
            split_csv_line(r#"一,1,10,one,"イチ,イツ,ひと""#),
            ["一", "1", "10", "one", "イチ,イツ,ひと"]
        );
    }

    #[test]
    fn unescapes_doubled_quotes() {
        assert_eq!(split_csv_line(r#"a,"say ""hi""",b"#), ["a", r#"say "hi""#, "b"]);
    }

    #[test]
    fn loads_records_with_multiple_readings() {
        let file = write_temp("一,1,10,one,\"イチ,イツ\"\n曖,S,,unclear,アイ\n");
        let records = load_dataset(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kanji, "一");
        assert_eq!(records[0].kanken.as_deref(), Some("10"));
        assert_eq!(records[0].readings, ["イチ", "イツ"]);
        // Empty kanken field means unrated.
        assert_eq!(records[1].kanken, None);
        assert_eq!(records[1].readings, ["アイ"]);
    }

    #[test]
    fn short_rows_are_skipped() {
        let file = write_temp("broken,row\n一,1,10,one,イチ\n\n");
        let records = load_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn readings_are_nfkc_normalized() {
        // Half-width katakana folds to full-width under NFKC.
        let file = write_temp("一,1,10,one,ｲﾁ\n");
        let records = load_dataset(file.path()).unwrap();
        assert_eq!(records[0].readings, ["イチ"]);
    }

    #[test]
    fn kanken_list_collects_first_fields() {
        let file = write_temp("誰,extra\n頃\n\n");
        let glyphs = load_kanken_list(file.path()).unwrap();
        assert_eq!(glyphs.len(), 2);
        assert!(glyphs.contains("誰"));
        assert!(glyphs.contains("頃"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_dataset(Path::new("no-such-dataset.csv"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
