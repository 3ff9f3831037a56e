use crate::models::{
    MatchCandidate, MatchGroup, SimilarityMeasure, Span, TermIndex, TermStore, TextNormalizer,
};
use crate::types::RecordId;
use log::trace;
use std::collections::{BTreeSet, HashMap};

/// Turns candidate spans into ranked match groups.
pub struct CandidateScorer<'a> {
    term_index: &'a dyn TermIndex,
    term_store: &'a dyn TermStore,
    similarity_measure: SimilarityMeasure,
    ngram_length: usize,
    normalizer: TextNormalizer,
}

impl<'a> CandidateScorer<'a> {
    pub fn new(
        term_index: &'a dyn TermIndex,
        term_store: &'a dyn TermStore,
        similarity_measure: SimilarityMeasure,
        ngram_length: usize,
        normalize_unicode: bool,
    ) -> Self {
        Self {
            term_index,
            term_store,
            similarity_measure,
            ngram_length,
            normalizer: TextNormalizer::new(normalize_unicode),
        }
    }

    /// Scores every span and keeps the non-empty groups, in span order.
    pub fn score_spans<I>(&self, spans: I) -> Vec<MatchGroup>
    where
        I: IntoIterator<Item = Span>,
    {
        spans
            .into_iter()
            .filter_map(|span| self.score_span(span))
            .collect()
    }

    /// Looks up a single span.
    ///
    /// Returns `None` when no dictionary term maps to a record with a non-zero
    /// similarity.
    pub fn score_span(&self, span: Span) -> Option<MatchGroup> {
        let query = self.normalizer.normalize(&span.text);

        let terms: BTreeSet<String> = self.term_index.retrieve(&query).into_iter().collect();

        let mut candidates: Vec<MatchCandidate> = Vec::with_capacity(terms.len());
        let mut best_by_record: HashMap<RecordId, usize> = HashMap::new();

        for term in terms {
            let Some((record_id, data)) = self.term_store.get(&term) else {
                trace!("Term \"{}\" has no record, skipping", term);
                continue;
            };

            let similarity = self
                .similarity_measure
                .similarity(&query, &term, self.ngram_length);

            if similarity == 0.0 {
                continue;
            }

            let candidate = MatchCandidate {
                start: span.start,
                end: span.end,
                ngram: span.text.clone(),
                term,
                record_id,
                data,
                similarity,
            };

            match best_by_record.get(&candidate.record_id) {
                Some(&candidate_idx) => {
                    if candidate.similarity > candidates[candidate_idx].similarity {
                        candidates[candidate_idx] = candidate;
                    }
                }
                None => {
                    best_by_record.insert(candidate.record_id.clone(), candidates.len());
                    candidates.push(candidate);
                }
            }
        }

        if !candidates.is_empty() {
            trace!(
                "Span {}..{} \"{}\" has {} candidate(s)",
                span.start,
                span.end,
                span.text,
                candidates.len()
            );
        }

        MatchGroup::from_candidates(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrugRecord, MemoryTermIndex, MemoryTermStore};

    fn build(records: Vec<DrugRecord>) -> (MemoryTermIndex, MemoryTermStore) {
        let mut index = MemoryTermIndex::new(SimilarityMeasure::Cosine, 0.7, 3, false);
        let mut store = MemoryTermStore::new(false);

        for record in records {
            for term in record.terms() {
                index.insert(term);
            }
            store.insert(record);
        }

        (index, store)
    }

    fn ivermectin() -> DrugRecord {
        DrugRecord {
            drugbank_id: "DB00602".to_string(),
            name: "Ivermectin".to_string(),
            synonyms: vec!["Ivermectina".to_string(), "Ivermectine".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_keeps_best_candidate_per_record() {
        let (index, store) = build(vec![ivermectin()]);
        let scorer = CandidateScorer::new(&index, &store, SimilarityMeasure::Cosine, 3, false);

        let group = scorer
            .score_span(Span::new(0, 10, "ivermectin"))
            .expect("span should match");

        assert_eq!(group.len(), 1);
        assert_eq!(group.top().term, "ivermectin");
        assert_eq!(group.top().record_id, "DB00602");
        assert_eq!(group.similarity(), 1.0);
    }

    #[test]
    fn test_candidates_sorted_by_similarity() {
        let (index, store) = build(vec![
            ivermectin(),
            DrugRecord {
                drugbank_id: "DB99999".to_string(),
                name: "Ivermectina".to_string(),
                ..Default::default()
            },
        ]);
        let scorer = CandidateScorer::new(&index, &store, SimilarityMeasure::Cosine, 3, false);

        let group = scorer
            .score_span(Span::new(0, 11, "ivermectina"))
            .expect("span should match");

        // "ivermectina" was re-pointed at DB99999 by the second record
        assert_eq!(group.len(), 2);
        assert_eq!(group.top().record_id, "DB99999");
        assert!(group.candidates()[0].similarity >= group.candidates()[1].similarity);
    }

    #[test]
    fn test_unknown_span_yields_no_group() {
        let (index, store) = build(vec![ivermectin()]);
        let scorer = CandidateScorer::new(&index, &store, SimilarityMeasure::Cosine, 3, false);

        assert!(scorer.score_span(Span::new(0, 10, "management")).is_none());
    }
}
