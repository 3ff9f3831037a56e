use crate::types::{NgramSet, Similarity};
use crate::utils::make_ngrams;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Measure used to compare the character n-gram sets of two strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimilarityMeasure {
    Dice,
    Jaccard,
    Cosine,
    /// Raw intersection size; not normalized.
    Overlap,
}

impl SimilarityMeasure {
    pub const ALL: [SimilarityMeasure; 4] = [
        SimilarityMeasure::Dice,
        SimilarityMeasure::Jaccard,
        SimilarityMeasure::Cosine,
        SimilarityMeasure::Overlap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMeasure::Dice => "dice",
            SimilarityMeasure::Jaccard => "jaccard",
            SimilarityMeasure::Cosine => "cosine",
            SimilarityMeasure::Overlap => "overlap",
        }
    }

    /// Whether scores are confined to `[0, 1]`.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, SimilarityMeasure::Overlap)
    }

    /// Scores `x` against `y` using sets of character n-grams of length `n`.
    ///
    /// Similarity with an empty string is defined as 0.
    pub fn similarity(&self, x: &str, y: &str, n: usize) -> Similarity {
        if x.is_empty() || y.is_empty() {
            return 0.0;
        }

        self.score_ngram_sets(&make_ngrams(x, n), &make_ngrams(y, n))
    }

    /// Scores two precomputed n-gram sets. An empty set scores 0.
    pub fn score_ngram_sets(&self, x_ngrams: &NgramSet, y_ngrams: &NgramSet) -> Similarity {
        if x_ngrams.is_empty() || y_ngrams.is_empty() {
            return 0.0;
        }

        let intersection = x_ngrams.intersection(y_ngrams).count() as f64;
        let x_len = x_ngrams.len() as f64;
        let y_len = y_ngrams.len() as f64;

        match self {
            SimilarityMeasure::Dice => 2.0 * intersection / (x_len + y_len),
            SimilarityMeasure::Jaccard => intersection / (x_len + y_len - intersection),
            SimilarityMeasure::Cosine => intersection / (x_len * y_len).sqrt(),
            SimilarityMeasure::Overlap => intersection,
        }
    }
}

impl fmt::Display for SimilarityMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMeasure {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SimilarityMeasure::ALL
            .into_iter()
            .find(|measure| measure.as_str() == name)
            .ok_or_else(|| {
                Error::ConfigurationError(format!(
                    "\"{}\" is not a valid similarity name. Choose between {}",
                    name,
                    SimilarityMeasure::ALL.map(|measure| measure.as_str()).join(", ")
                ))
            })
    }
}
