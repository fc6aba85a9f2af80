//! autocorrect CLI binary.
//!
//! Builds a corrector from a corpus (or the built-in sample) and prints one
//! `original -> corrected` line per query word.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use autocorrectrs::{Result, SpellCorrector, Vocabulary, SAMPLE_CORPUS};

const DEFAULT_WORDS: [&str; 5] = ["speling", "exampl", "langauge", "pythno", "smal"];

#[derive(Parser, Debug, Clone)]
#[command(name = "autocorrect")]
#[command(about = "Correct misspelled words against a corpus vocabulary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct AutocorrectArgs {
    /// Corpus text file; the built-in sample corpus is used when absent
    #[arg(short, long, env = "AUTOCORRECT_CORPUS", value_name = "CORPUS_FILE")]
    corpus: Option<PathBuf>,

    /// `word count` listing; takes precedence over any corpus
    #[arg(long, env = "AUTOCORRECT_COUNTS", value_name = "COUNTS_FILE")]
    counts: Option<PathBuf>,

    /// Also print the N most frequent words of the vocabulary
    #[arg(short, long, value_name = "N")]
    top: Option<usize>,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Words to correct
    #[arg(value_name = "WORDS")]
    words: Vec<String>,
}

fn build_corrector(args: &AutocorrectArgs) -> Result<SpellCorrector> {
    match (&args.corpus, &args.counts) {
        (Some(corpus), Some(counts)) => {
            log::info!(
                "counts file {} overrides corpus {}",
                counts.display(),
                corpus.display()
            );
            SpellCorrector::from_counts_file(counts)
        }
        (None, Some(counts)) => SpellCorrector::from_counts_file(counts),
        (Some(corpus), None) => SpellCorrector::from_corpus_file(corpus),
        (None, None) => {
            log::info!("no corpus given, using the built-in sample");
            Ok(SpellCorrector::from_corpus(SAMPLE_CORPUS))
        }
    }
}

fn run(args: AutocorrectArgs) -> Result<()> {
    let corrector = build_corrector(&args)?;

    let words: Vec<String> = if args.words.is_empty() {
        DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words.iter().map(|w| w.to_lowercase()).collect()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(&mut out, &corrector, &words, args.top)
}

/// Write one `original -> corrected` line per word, then the `top` most
/// frequent words when requested.
fn report<W: Write>(
    out: &mut W,
    corrector: &SpellCorrector,
    words: &[String],
    top: Option<usize>,
) -> Result<()> {
    for (original, corrected) in corrector.autocorrect_all(words.iter().map(String::as_str)) {
        writeln!(out, "{:10} -> {}", original, corrected)?;
    }

    if let Some(n) = top {
        writeln!(out)?;
        writeln!(out, "Top word frequencies:")?;
        for (word, count) in corrector.table().most_common(n) {
            writeln!(out, "{:>12} {}", word, count)?;
        }
    }
    Ok(())
}

fn main() {
    let args = AutocorrectArgs::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
