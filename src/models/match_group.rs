use crate::models::{DrugRecord, Interval};
use crate::types::{CharOffset, RecordId, Similarity, Term};
use std::sync::Arc;

/// A dictionary term matched against one span of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub start: CharOffset,
    pub end: CharOffset,
    /// Span text as it was reconstructed from the document.
    pub ngram: String,
    /// Normalized dictionary term.
    pub term: Term,
    pub record_id: RecordId,
    pub data: Arc<DrugRecord>,
    pub similarity: Similarity,
}

/// Ranked candidates anchored to the same span.
///
/// Never empty, sorted by similarity in descending order, and holding at most
/// one candidate per record identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchGroup {
    candidates: Vec<MatchCandidate>,
}

impl MatchGroup {
    /// Builds a group from candidates that are already unique per record.
    ///
    /// Returns `None` for an empty list. Equal similarities keep their input order.
    pub fn from_candidates(mut candidates: Vec<MatchCandidate>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }

        candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        Some(MatchGroup { candidates })
    }

    /// Highest scoring candidate.
    pub fn top(&self) -> &MatchCandidate {
        &self.candidates[0]
    }

    pub fn start(&self) -> CharOffset {
        self.top().start
    }

    pub fn end(&self) -> CharOffset {
        self.top().end
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start(), self.end())
    }

    /// Length of the anchor span in characters.
    pub fn span_len(&self) -> usize {
        self.interval().len()
    }

    pub fn similarity(&self) -> Similarity {
        self.top().similarity
    }

    pub fn candidates(&self) -> &[MatchCandidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchCandidate> {
        self.candidates.iter()
    }

    pub fn into_candidates(self) -> Vec<MatchCandidate> {
        self.candidates
    }
}

impl<'a> IntoIterator for &'a MatchGroup {
    type Item = &'a MatchCandidate;
    type IntoIter = std::slice::Iter<'a, MatchCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
