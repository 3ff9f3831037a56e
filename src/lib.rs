mod config;
pub use config::{
    DEFAULT_MIN_MATCH_LENGTH, DEFAULT_NGRAM_LENGTH, DEFAULT_OVERLAP_CRITERIA,
    DEFAULT_SIMILARITY_MEASURE, DEFAULT_THRESHOLD, DEFAULT_WINDOW,
};
pub mod constants;
pub mod models;
pub use models::{
    DrugDictionary, DrugFinder, DrugFinderConfig, DrugFinderInfo, DrugRecord, Error,
    LogMatchObserver, MatchCandidate, MatchGroup, MatchObserver, MatchSummary, MemoryTermIndex,
    MemoryTermStore, OverlapCriteria, OverlapResolver, PartOfSpeech, RuleBasedTokenizer,
    SimilarityMeasure, Span, SpanGenerator, TermIndex, TermStore, TextNormalizer, Token,
    Tokenizer,
};
pub mod types;
pub use types::{CharOffset, RecordId, Similarity, Term, TermRef};
pub mod utils;
pub use utils::{make_ngrams, read_drug_dictionary_from_path, read_drug_dictionary_from_string};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Finds drugs in `text` with the default configuration.
///
/// Builds a throwaway in-memory dictionary from `records`. Build a
/// `DrugDictionary` once and reuse it when matching more than one document.
pub fn find_drugs_in_text<I>(text: &str, records: I) -> Result<Vec<MatchGroup>, Error>
where
    I: IntoIterator<Item = DrugRecord>,
{
    find_drugs_in_text_with_custom_config(DrugFinderConfig::default(), text, records)
}

pub fn find_drugs_in_text_with_custom_config<I>(
    config: DrugFinderConfig,
    text: &str,
    records: I,
) -> Result<Vec<MatchGroup>, Error>
where
    I: IntoIterator<Item = DrugRecord>,
{
    let dictionary = DrugDictionary::new(records, &config);
    let drug_finder = DrugFinder::with_dictionary(config, &dictionary)?;

    Ok(drug_finder.find_drugs(text))
}
