//! Phrasematch - phrase-level plagiarism detection between two text files.
//!
//! # Overview
//!
//! This tool estimates how much of one document was lifted from another by:
//! - Tokenizing both documents into whitespace-delimited words
//! - Normalizing each word to its canonical synonym form
//! - Sliding a fixed-width window over each document to build phrase tuples
//! - Reporting the percentage of the second document's phrases that occur
//!   anywhere in the first
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Word Sources   │ ← File reading and tokenization (source.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  SynonymTable   │ ← Canonical-form lookup (synonyms.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Windower     │ ← Sliding phrase windows (windower.rs)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Detector     │ ← Phrase set + overlap score (detector.rs, scorer.rs)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - `main.rs`: Entry point, argument parsing, and output formatting
//! - `detector.rs`: Detector construction and overlap reporting
//! - `scorer.rs`: Overlap percentage over a phrase set
//! - `windower.rs`: Sliding-window phrase extraction
//! - `phrase.rs`: Phrase tuples and the membership set
//! - `synonyms.rs`: Synonym table loading and lookup
//! - `source.rs`: Word and line sources
//! - `config.rs`: Persisted defaults (tuple size)

use clap::Parser;
use std::path::PathBuf;

mod config;
mod detector;
mod error;
mod phrase;
mod scorer;
mod source;
mod synonyms;
mod windower;

use config::Config;
use detector::Detector;
use synonyms::SynonymTable;

#[derive(Parser, Debug)]
#[command(name = "phrasematch")]
#[command(about = "Phrase-level plagiarism detection between two text files")]
#[command(version)]
struct Args {
    /// Synonym dictionary file, one group of interchangeable words per line
    #[arg(short, long)]
    synonyms: PathBuf,

    /// The reference document (the file plagiarized from)
    file_one: PathBuf,

    /// The query document (the file checked for plagiarism)
    file_two: PathBuf,

    /// Number of consecutive words per phrase (defaults from config)
    #[arg(short, long)]
    tuple_size: Option<usize>,

    /// Print table and document statistics while scoring
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config::load()?;

    // Persist defaults so users get a concrete config.toml on first run.
    if let Err(err) = config.save() {
        eprintln!("Failed to persist config defaults: {err}");
    }

    let tuple_size = args.tuple_size.unwrap_or(config.default_tuple_size);

    let synonyms = SynonymTable::from_lines(source::read_lines(&args.synonyms)?);
    let reference_words = source::read_words(&args.file_one)?;
    let query_words = source::read_words(&args.file_two)?;

    if args.verbose {
        println!("Synonym table loaded: {} words", synonyms.len());
        println!("{}: {} words", args.file_one.display(), reference_words.len());
        println!("{}: {} words", args.file_two.display(), query_words.len());
    }

    let detector = Detector::new(&synonyms, &reference_words, &query_words, tuple_size)?;

    if args.verbose {
        println!(
            "Comparing {} query phrases against {} distinct reference phrases (tuple size {})",
            detector.query_phrase_count(),
            detector.reference_phrase_count(),
            tuple_size
        );
    }

    println!(
        "Percentage of text plagiarized is: {:.1}%",
        detector.percentage()
    );

    Ok(())
}
