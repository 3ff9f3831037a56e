use crate::models::{OverlapCriteria, SimilarityMeasure};
use std::collections::HashSet;

/// Options for a `DrugFinder` instance. Read-only once the finder is built.
///
/// `Default` yields the stock configuration: cosine similarity at a 0.7
/// threshold, a five-token window, trigrams, and the English stopword list.
#[derive(Debug, Clone)]
pub struct DrugFinderConfig {
    /// Minimum similarity a dictionary term needs to be retrieved by the index.
    pub threshold: f64,
    /// Maximum number of tokens in a candidate span.
    pub window: usize,
    pub similarity_measure: SimilarityMeasure,
    /// Tie-break used when candidate spans overlap.
    pub overlap_criteria: OverlapCriteria,
    pub ngram_length: usize,
    /// Minimum span length in characters.
    pub min_match_length: usize,
    /// Fold queries (and dictionary terms) to their closest ASCII representation.
    pub normalize_unicode: bool,
    pub stopwords: HashSet<String>,
    /// Stopword lemmas allowed to start a span.
    pub negations: HashSet<String>,
    /// Punctuation allowed inside a span.
    pub valid_punctuation: HashSet<String>,
}
