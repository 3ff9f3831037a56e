use crate::models::SimilarityMeasure;
use crate::types::{NgramSet, Term, TermRef};
use crate::utils::{make_ngrams, normalize_term};
use std::collections::BTreeMap;

/// Approximate lookup of dictionary strings.
///
/// The similarity measure and threshold are fixed when the index is built.
/// Returns an empty list when nothing is within the threshold.
pub trait TermIndex: Send + Sync {
    fn retrieve(&self, query: &TermRef) -> Vec<Term>;
}

/// `TermIndex` that scores the query against every stored term.
///
/// Suited to small dictionaries and tests; terms come back in lexical order.
#[derive(Debug, Clone)]
pub struct MemoryTermIndex {
    similarity_measure: SimilarityMeasure,
    threshold: f64,
    ngram_length: usize,
    fold_to_ascii: bool,
    terms: BTreeMap<Term, NgramSet>,
}

impl MemoryTermIndex {
    pub fn new(
        similarity_measure: SimilarityMeasure,
        threshold: f64,
        ngram_length: usize,
        fold_to_ascii: bool,
    ) -> Self {
        Self {
            similarity_measure,
            threshold,
            ngram_length,
            fold_to_ascii,
            terms: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, term: &TermRef) {
        let term = normalize_term(term, self.fold_to_ascii);

        if term.is_empty() || self.terms.contains_key(&term) {
            return;
        }

        let ngrams = make_ngrams(&term, self.ngram_length);
        self.terms.insert(term, ngrams);
    }

    pub fn similarity_measure(&self) -> SimilarityMeasure {
        self.similarity_measure
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn ngram_length(&self) -> usize {
        self.ngram_length
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl TermIndex for MemoryTermIndex {
    fn retrieve(&self, query: &TermRef) -> Vec<Term> {
        let query = normalize_term(query, self.fold_to_ascii);
        let query_ngrams = make_ngrams(&query, self.ngram_length);

        if query_ngrams.is_empty() {
            return vec![];
        }

        self.terms
            .iter()
            .filter(|(_, term_ngrams)| {
                self.similarity_measure
                    .score_ngram_sets(&query_ngrams, term_ngrams)
                    >= self.threshold
            })
            .map(|(term, _)| term.clone())
            .collect()
    }
}
