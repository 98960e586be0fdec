//! Get-or-create holder for a candidate's summary.

use std::sync::OnceLock;

use super::ScoreSummary;

/// Embedded in a candidate; the first access initializes its summary.
///
/// Initialization is race-free: concurrent first accesses observe the same
/// summary.
#[derive(Debug, Default)]
pub struct LazyScoreSummary {
    cell: OnceLock<ScoreSummary>,
}

impl LazyScoreSummary {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &ScoreSummary {
        self.cell.get_or_init(ScoreSummary::new)
    }

    /// Whether any card has touched the summary yet.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The summary if it has been created, without creating it.
    pub fn peek(&self) -> Option<&ScoreSummary> {
        self.cell.get()
    }
}
