//! CSV import for per-language dictionary exports.
//!
//! Expected columns: `word, english, pos, gender, frequency` (extra columns
//! such as `ipa` or `definition` are ignored). Rows are grouped into the
//! concept table by their `english` gloss, preserving first-seen order.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use nordum_core::normalize::clean;
use nordum_core::{Candidate, ConceptTable, Gender, Language, PartOfSpeech};

#[derive(Debug, Deserialize)]
struct SourceRow {
    word: String,
    english: String,
    pos: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    frequency: String,
}

/// Read one language's source file into the concept table.
///
/// Returns the number of rows imported. Unusable rows (unreadable, blank
/// word or gloss, unknown part of speech) are skipped with a warning rather
/// than failing the build.
pub fn import_csv<P: AsRef<Path>>(
    table: &mut ConceptTable,
    language: Language,
    path: P,
) -> Result<usize> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut imported = 0usize;
    for (i, result) in reader.deserialize::<SourceRow>().enumerate() {
        // approximate source line: header on line 1, comment lines not counted
        let line = i + 2;
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                warn!(file = %path.display(), line, %err, "unreadable row skipped");
                continue;
            }
        };

        let word = clean(&row.word);
        let concept = clean(&row.english);
        if word.is_empty() || concept.is_empty() {
            warn!(file = %path.display(), line, "blank word or gloss, row skipped");
            continue;
        }
        let Some(pos) = PartOfSpeech::parse(&row.pos) else {
            warn!(
                file = %path.display(),
                line,
                pos = %row.pos,
                "unknown part of speech, row skipped"
            );
            continue;
        };

        let frequency = row.frequency.trim().parse::<f64>().unwrap_or(0.0).max(0.0);
        let mut candidate = Candidate::with_frequency(word, pos, frequency);
        candidate.gender = Gender::parse(&row.gender);
        table.add_candidate(&concept, language, candidate);
        imported += 1;
    }
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_rows_and_skips_the_unusable() {
        let path = std::env::temp_dir().join("nordum_import_test.csv");
        std::fs::write(
            &path,
            "word,english,pos,gender,frequency\n\
             # comment line\n\
             Brød,bread,noun,neuter,1200\n\
             ,empty,noun,,\n\
             hus,house,dwelling,,\n\
             arbejder,work,verb,,not-a-number\n",
        )
        .unwrap();

        let mut table = ConceptTable::new();
        let imported = import_csv(&mut table, Language::Danish, &path).unwrap();
        std::fs::remove_file(&path).ok();

        // the blank word and the unknown part of speech both drop out
        assert_eq!(imported, 2);
        assert_eq!(table.len(), 2);

        let bread = &table.get("bread").unwrap().candidates[&Language::Danish];
        assert_eq!(bread.word, "brød");
        assert_eq!(bread.gender, Some(Gender::Neuter));
        assert_eq!(bread.frequency, 1200.0);

        let work = &table.get("work").unwrap().candidates[&Language::Danish];
        assert_eq!(work.frequency, 0.0);
    }
}
