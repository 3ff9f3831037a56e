use crate::models::{IntervalSet, MatchGroup};
use crate::Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Tie-break policy used when accepted groups would overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapCriteria {
    /// Prefer the higher top similarity, then the longer span.
    Score,
    /// Prefer the longer span, then the higher top similarity.
    Length,
}

impl OverlapCriteria {
    pub const ALL: [OverlapCriteria; 2] = [OverlapCriteria::Score, OverlapCriteria::Length];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapCriteria::Score => "score",
            OverlapCriteria::Length => "length",
        }
    }

    /// Orders two groups so that the preferred one compares as greater.
    pub fn compare(&self, a: &MatchGroup, b: &MatchGroup) -> Ordering {
        let by_similarity = a.similarity().total_cmp(&b.similarity());
        let by_length = a.span_len().cmp(&b.span_len());

        match self {
            OverlapCriteria::Score => by_similarity.then(by_length),
            OverlapCriteria::Length => by_length.then(by_similarity),
        }
    }
}

impl fmt::Display for OverlapCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlapCriteria {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        OverlapCriteria::ALL
            .into_iter()
            .find(|criteria| criteria.as_str() == name)
            .ok_or_else(|| {
                Error::ConfigurationError(format!(
                    "\"{}\" is not a valid overlapping criteria. Choose between {}",
                    name,
                    OverlapCriteria::ALL.map(|criteria| criteria.as_str()).join(", ")
                ))
            })
    }
}

/// Selects a non-overlapping subset of match groups.
#[derive(Debug, Clone, Copy)]
pub struct OverlapResolver {
    criteria: OverlapCriteria,
}

impl OverlapResolver {
    pub fn new(criteria: OverlapCriteria) -> Self {
        Self { criteria }
    }

    /// Ranks groups by the configured criteria and greedily keeps each one
    /// whose span does not overlap an already kept span.
    ///
    /// The result is in ranking order. Groups with identical keys keep their
    /// relative input order.
    pub fn resolve(&self, mut groups: Vec<MatchGroup>) -> Vec<MatchGroup> {
        groups.sort_by(|a, b| self.criteria.compare(b, a));

        let mut intervals = IntervalSet::new();
        let mut selected = Vec::with_capacity(groups.len());

        for group in groups {
            let interval = group.interval();

            if intervals.overlaps(&interval) {
                continue;
            }

            intervals.add(interval);
            selected.push(group);
        }

        selected
    }
}
