use crate::types::CharOffset;

/// Half-open character interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: CharOffset,
    pub end: CharOffset,
}

impl Interval {
    pub fn new(start: CharOffset, end: CharOffset) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Two intervals overlap when they share at least one point; touching
    /// endpoints (`[0, 5)` and `[5, 9)`) do not.
    pub fn overlaps(&self, other: &Interval) -> bool {
        other.start < self.end && other.end > self.start
    }
}

/// Intervals accepted so far during overlap resolution.
///
/// Insertions are never merged. Lookups are a linear scan, which is fine for
/// the few hundred accepted spans a document produces.
#[derive(Debug, Clone, Default)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlaps(&self, interval: &Interval) -> bool {
        self.intervals.iter().any(|other| interval.overlaps(other))
    }

    pub fn add(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
