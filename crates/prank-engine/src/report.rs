//! Outcome of one scoring run.

use std::time::Duration;

use prank_core::{PrankError, PrankResult, ScoringError};

/// A (candidate, card) unit that produced no result.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFailure {
    pub candidate_index: usize,
    pub card_name: String,
    pub error: ScoringError,
}

/// Counts and failures gathered after the completion barrier.
///
/// `scheduled == completed + failures.len() + disabled + cancelled`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringReport {
    /// Candidates × cards.
    pub scheduled: usize,
    pub completed: usize,
    /// Units skipped because their card had `enabled = false`.
    pub disabled: usize,
    /// Units skipped after cancellation was observed.
    pub cancelled: usize,
    pub failures: Vec<UnitFailure>,
    pub duration: Duration,
}

impl ScoringReport {
    /// Every scheduled unit either completed or was disabled.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.cancelled == 0
    }

    pub fn was_cancelled(&self) -> bool {
        self.cancelled > 0
    }

    pub fn failures_for(&self, candidate_index: usize) -> impl Iterator<Item = &UnitFailure> {
        self.failures
            .iter()
            .filter(move |f| f.candidate_index == candidate_index)
    }

    /// `Err(PrankError::Cancelled)` when any unit was skipped by cancellation.
    pub fn into_result(self) -> PrankResult<Self> {
        if self.was_cancelled() {
            Err(PrankError::Cancelled)
        } else {
            Ok(self)
        }
    }
}
