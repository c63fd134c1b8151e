use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use kakitori_types::KanjiRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::template;

/// Writes a quiz page and a matching answer-key page for a record set.
///
/// Both pages use the same (possibly shuffled) order, so the key lines up
/// with the quiz.
pub struct WorksheetGenerator {
    records: Vec<Arc<KanjiRecord>>,
    order: Vec<usize>,
    prefix: Option<String>,
}

impl WorksheetGenerator {
    /// Seed semantics: `None` shuffles from OS entropy, `Some(0)` keeps
    /// the input order, any other value shuffles deterministically.
    pub fn new(
        records: Vec<Arc<KanjiRecord>>,
        seed: Option<u64>,
        prefix: Option<String>,
    ) -> Self {
        let mut order: Vec<usize> = (0..records.len()).collect();
        match seed {
            Some(0) => {}
            Some(seed) => order.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => order.shuffle(&mut rand::thread_rng()),
        }

        Self {
            records,
            order,
            prefix,
        }
    }

    /// Write `quiz.html` and `key.html` (prefixed if a prefix is set)
    /// into the current directory.
    pub fn generate(&self) -> Result<()> {
        self.write_file(&self.file_name("quiz.html"), false)?;
        self.write_file(&self.file_name("key.html"), true)?;
        Ok(())
    }

    /// Render one page to any writer; `show_key` controls glyph
    /// visibility.
    pub fn write_page<W: Write>(&self, out: &mut W, show_key: bool) -> Result<()> {
        out.write_all(template::page_head(show_key).as_bytes())?;

        for &index in &self.order {
            let record = &self.records[index];
            let readings = record.readings.join(",");
            let entry = template::entry(&readings, &record.english, record.glyph());
            out.write_all(entry.as_bytes())?;
        }

        out.write_all(template::PAGE_FOOT.as_bytes())?;
        Ok(())
    }

    fn write_file(&self, name: &str, show_key: bool) -> Result<()> {
        let file =
            File::create(name).with_context(|| format!("failed to create {name}"))?;
        let mut out = BufWriter::new(file);
        self.write_page(&mut out, show_key)?;
        out.flush()
            .with_context(|| format!("failed to flush {name}"))?;
        Ok(())
    }

    fn file_name(&self, root: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}-{root}"),
            None => root.to_string(),
        }
    }
}
