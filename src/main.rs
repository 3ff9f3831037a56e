use clap::Parser;
use drug_finder::{
    DrugDictionary, DrugFinder, DrugFinderConfig, Error, LogMatchObserver, OverlapCriteria,
    SimilarityMeasure, DEFAULT_MIN_MATCH_LENGTH, DEFAULT_OVERLAP_CRITERIA,
    DEFAULT_SIMILARITY_MEASURE, DEFAULT_THRESHOLD, DEFAULT_WINDOW,
};
use log::{debug, error};
use std::io::{self, Read};
use std::path::PathBuf;

/// Finds drug names, synonyms and products in text read from stdin.
#[derive(Debug, Parser)]
#[command(name = "drug-finder", version, about)]
struct Args {
    /// Dictionary CSV (optionally gzipped) or an installed dictionary directory
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// Minimum similarity for a dictionary term to be considered
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Maximum number of tokens per candidate span
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    window: usize,

    /// One of dice, jaccard, cosine, overlap
    #[arg(short, long, default_value_t = DEFAULT_SIMILARITY_MEASURE)]
    similarity: SimilarityMeasure,

    /// One of score, length
    #[arg(short, long, default_value_t = DEFAULT_OVERLAP_CRITERIA)]
    overlapping_criteria: OverlapCriteria,

    /// Minimum span length in characters
    #[arg(short, long, default_value_t = DEFAULT_MIN_MATCH_LENGTH)]
    min_match_length: usize,

    /// Fold text and dictionary terms to ASCII before matching
    #[arg(long)]
    normalize_unicode: bool,

    /// Keep overlapping matches
    #[arg(long)]
    no_best_match: bool,

    /// Consider every token window instead of syntactic spans
    #[arg(long)]
    ignore_syntax: bool,

    /// Print the matcher configuration and exit
    #[arg(long)]
    info: bool,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let config = DrugFinderConfig {
        threshold: args.threshold,
        window: args.window,
        similarity_measure: args.similarity,
        overlap_criteria: args.overlapping_criteria,
        min_match_length: args.min_match_length,
        normalize_unicode: args.normalize_unicode,
        ..Default::default()
    };

    let dictionary = if args.dictionary.is_dir() {
        DrugDictionary::from_dir(&args.dictionary, &config)?
    } else {
        DrugDictionary::from_path(&args.dictionary, &config)?
    };

    let observer = LogMatchObserver;
    let drug_finder = DrugFinder::with_dictionary(config, &dictionary)?.with_observer(&observer);

    if args.info {
        println!("{}", drug_finder.get_info());
        return Ok(());
    }

    // Read the input text from stdin
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    debug!("Read {} characters from stdin", input.chars().count());

    let groups = drug_finder.match_text(&input, !args.no_best_match, args.ignore_syntax);

    for group in &groups {
        for candidate in group {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
                candidate.start,
                candidate.end,
                candidate.ngram,
                candidate.term,
                candidate.record_id,
                candidate.data.name,
                candidate.similarity
            );
        }
    }

    Ok(())
}
