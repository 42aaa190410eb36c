//! Export surfaces for the assembled lexicon.
//!
//! Four artifacts, all derived from the same export ordering: a JSON
//! document (entries plus a metadata block), a flat wordlist, aggregate
//! statistics, and a compiled fst set of every surface form.

use anyhow::Result;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::assemble::BuildStats;
use crate::lexicon::Lexicon;
use crate::rules::ORTHOGRAPHIC_RULES;

/// JSON value for the whole lexicon: a `metadata` block plus an `entries`
/// object keyed by canonical form, in export order.
pub fn to_json_value(lexicon: &Lexicon) -> Result<Value> {
    let mut entries = serde_json::Map::new();
    for entry in lexicon.export_order() {
        entries.insert(entry.canonical_form.clone(), serde_json::to_value(entry)?);
    }
    let rule_summary = serde_json::to_value(ORTHOGRAPHIC_RULES.rules())?;
    Ok(json!({
        "metadata": {
            "version": env!("CARGO_PKG_VERSION"),
            "generated": chrono::Utc::now().to_rfc3339(),
            "entryCount": lexicon.len(),
            "canonicalCount": lexicon.canonical_count(),
            "alternativeCount": lexicon.alternative_count(),
            "ruleSummary": rule_summary,
        },
        "entries": Value::Object(entries),
    }))
}

/// Write the JSON export, pretty-printed with a trailing newline.
pub fn write_json<P: AsRef<Path>>(lexicon: &Lexicon, path: P) -> Result<()> {
    let value = to_json_value(lexicon)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Every surface form in the lexicon: canonical spellings plus inflected
/// forms, sorted and deduplicated.
pub fn surface_forms(lexicon: &Lexicon) -> Vec<String> {
    let mut forms: Vec<String> = lexicon
        .iter()
        .flat_map(|entry| entry.surface_forms().into_iter().map(str::to_string))
        .collect();
    forms.sort();
    forms.dedup();
    forms
}

/// Write the flat wordlist, one form per line.
pub fn write_wordlist<P: AsRef<Path>>(lexicon: &Lexicon, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for form in surface_forms(lexicon) {
        writeln!(writer, "{form}")?;
    }
    Ok(())
}

/// Aggregate statistics over the lexicon, with the pass counters folded in
/// when available.
pub fn statistics(lexicon: &Lexicon, stats: Option<&BuildStats>) -> Result<Value> {
    let mut by_pos: BTreeMap<&'static str, usize> = BTreeMap::new();
    for entry in lexicon.iter() {
        *by_pos.entry(entry.pos.as_str()).or_default() += 1;
    }
    let mean_cognate = if lexicon.is_empty() {
        0.0
    } else {
        lexicon.iter().map(|e| e.cognate_score).sum::<f64>() / lexicon.len() as f64
    };
    let mut value = json!({
        "totalEntries": lexicon.len(),
        "canonicalEntries": lexicon.canonical_count(),
        "alternativeEntries": lexicon.alternative_count(),
        "entriesByPos": by_pos,
        "meanCognateScore": mean_cognate,
    });
    if let Some(stats) = stats {
        value["buildStats"] = serde_json::to_value(stats)?;
    }
    Ok(value)
}

/// Write the statistics JSON.
pub fn write_statistics<P: AsRef<Path>>(
    lexicon: &Lexicon,
    stats: Option<&BuildStats>,
    path: P,
) -> Result<()> {
    let value = statistics(lexicon, stats)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Compile the surface forms into an fst set for fast membership tests.
///
/// `surface_forms` already yields sorted, deduplicated keys, which is what
/// the builder requires.
pub fn build_wordlist_set(lexicon: &Lexicon) -> Result<fst::Set<Vec<u8>>> {
    let mut builder = fst::SetBuilder::memory();
    for form in surface_forms(lexicon) {
        builder.insert(form)?;
    }
    let bytes = builder.into_inner()?;
    Ok(fst::Set::new(bytes)?)
}

/// Write the compiled set to a file.
pub fn write_wordlist_set<P: AsRef<Path>>(lexicon: &Lexicon, path: P) -> Result<()> {
    let set = build_wordlist_set(lexicon)?;
    std::fs::write(path, set.as_fst().as_bytes())?;
    Ok(())
}
