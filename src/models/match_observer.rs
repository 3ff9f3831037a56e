use crate::models::MatchGroup;
use log::info;

/// Counts describing one `match` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSummary {
    pub token_count: usize,
    pub group_count: usize,
    /// Candidates across all returned groups.
    pub candidate_count: usize,
}

impl MatchSummary {
    pub fn new(token_count: usize, groups: &[MatchGroup]) -> Self {
        Self {
            token_count,
            group_count: groups.len(),
            candidate_count: groups.iter().map(MatchGroup::len).sum(),
        }
    }
}

/// Receives a summary after every match run.
pub trait MatchObserver: Send + Sync {
    fn on_match(&self, summary: &MatchSummary);
}

/// Writes run summaries to the `info` log level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMatchObserver;

impl MatchObserver for LogMatchObserver {
    fn on_match(&self, summary: &MatchSummary) {
        info!(
            "{} extracted from {} tokens",
            summary.candidate_count, summary.token_count
        );
    }
}
