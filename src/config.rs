use crate::constants::{DRUGBANK_SPECIFIC_STOPWORDS, NEGATIONS, STOP_WORDS, UNICODE_DASHES};
use crate::models::{DrugFinderConfig, OverlapCriteria, SimilarityMeasure};

pub const DEFAULT_THRESHOLD: f64 = 0.7;
pub const DEFAULT_WINDOW: usize = 5;
pub const DEFAULT_NGRAM_LENGTH: usize = 3;
pub const DEFAULT_MIN_MATCH_LENGTH: usize = 1;
pub const DEFAULT_SIMILARITY_MEASURE: SimilarityMeasure = SimilarityMeasure::Cosine;
pub const DEFAULT_OVERLAP_CRITERIA: OverlapCriteria = OverlapCriteria::Score;

impl Default for DrugFinderConfig {
    fn default() -> Self {
        DrugFinderConfig {
            threshold: DEFAULT_THRESHOLD,
            window: DEFAULT_WINDOW,
            similarity_measure: DEFAULT_SIMILARITY_MEASURE,
            overlap_criteria: DEFAULT_OVERLAP_CRITERIA,
            ngram_length: DEFAULT_NGRAM_LENGTH,
            min_match_length: DEFAULT_MIN_MATCH_LENGTH,
            normalize_unicode: false,
            stopwords: STOP_WORDS
                .iter()
                .chain(DRUGBANK_SPECIFIC_STOPWORDS)
                .map(|word| word.to_string())
                .collect(),
            negations: NEGATIONS.iter().map(|word| word.to_string()).collect(),
            valid_punctuation: UNICODE_DASHES.iter().map(|dash| dash.to_string()).collect(),
        }
    }
}
