mod import;

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use nordum_core::{BuildOptions, ConceptTable, Language, assemble, export};

/// Build the Nordum lexicon from per-language dictionary exports.
#[derive(Parser)]
#[command(name = "nordum-build", version)]
struct Args {
    /// Norwegian Bokmål source CSV
    #[arg(long, value_name = "CSV")]
    norwegian: Option<PathBuf>,

    /// Danish source CSV
    #[arg(long, value_name = "CSV")]
    danish: Option<PathBuf>,

    /// Swedish source CSV
    #[arg(long, value_name = "CSV")]
    swedish: Option<PathBuf>,

    /// Build options TOML; defaults apply when omitted
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Directory for the generated artifacts
    #[arg(long, default_value = "out", value_name = "DIR")]
    out_dir: PathBuf,

    /// Also write a bincode snapshot of the assembled lexicon
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if args.norwegian.is_none() && args.danish.is_none() && args.swedish.is_none() {
        bail!("at least one of --norwegian, --danish or --swedish is required");
    }

    let options = match &args.config {
        Some(path) => match BuildOptions::load_toml(path) {
            Ok(options) => options,
            Err(err) => bail!("failed to read build options from {}: {err}", path.display()),
        },
        None => BuildOptions::default(),
    };

    let mut table = ConceptTable::new();
    let sources = [
        (Language::Norwegian, &args.norwegian),
        (Language::Danish, &args.danish),
        (Language::Swedish, &args.swedish),
    ];
    for (language, path) in sources {
        let Some(path) = path else { continue };
        let rows = import::import_csv(&mut table, language, path)?;
        println!(
            "{}: imported {} rows from {}",
            language.display_name(),
            rows,
            path.display()
        );
    }

    let (lexicon, stats) = assemble(&table, &options);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    export::write_json(&lexicon, args.out_dir.join("nordum.json"))?;
    export::write_wordlist(&lexicon, args.out_dir.join("nordum_wordlist.txt"))?;
    export::write_statistics(&lexicon, Some(&stats), args.out_dir.join("nordum_stats.json"))?;
    export::write_wordlist_set(&lexicon, args.out_dir.join("nordum_wordlist.fst"))?;
    if args.snapshot {
        let path = args.out_dir.join("nordum.bin");
        if let Err(err) = lexicon.save_bincode(&path) {
            bail!("failed to write snapshot {}: {err}", path.display());
        }
    }

    println!(
        "Assembled {} entries ({} canonical, {} alternatives) from {} concepts; \
         skipped {} concepts, {} canonical collisions, {} alternative collisions. \
         Artifacts written to {}",
        lexicon.len(),
        stats.canonical_entries,
        stats.alternatives_emitted,
        stats.concepts_seen,
        stats.concepts_skipped,
        stats.canonical_collisions,
        stats.alternatives_skipped,
        args.out_dir.display()
    );
    Ok(())
}
