//! Structured log events for scoring operations.
//!
//! Each function emits a `tracing` event with structured fields.

use std::time::Duration;

use crate::errors::{PrankErrorCode, ScoringError};

/// Two results were written under the same card name for one candidate.
pub fn name_collision(card_name: &str, previous_score: &str, new_score: &str) {
    tracing::warn!(
        event = "name_collision",
        card = %card_name,
        previous_score = %previous_score,
        new_score = %new_score,
        "score card name collision, last write wins"
    );
}

/// A (candidate, card) unit failed; the candidate lacks that card's result.
pub fn unit_failed(candidate_index: usize, card_name: &str, error: &ScoringError) {
    tracing::warn!(
        event = "unit_failed",
        candidate = candidate_index,
        card = %card_name,
        code = error.error_code(),
        error = %error,
        "score card failed for candidate"
    );
}

/// A unit finished after its time budget and its result was discarded.
pub fn unit_timed_out(candidate_index: usize, card_name: &str, elapsed: Duration, limit: Duration) {
    tracing::warn!(
        event = "unit_timed_out",
        candidate = candidate_index,
        card = %card_name,
        elapsed_ms = elapsed.as_millis() as u64,
        limit_ms = limit.as_millis() as u64,
        "score card exceeded its time budget"
    );
}

/// A run observed cancellation and skipped the remaining units.
pub fn run_cancelled(skipped: usize, scheduled: usize) {
    tracing::info!(
        event = "run_cancelled",
        skipped = skipped,
        scheduled = scheduled,
        "scoring run cancelled"
    );
}

/// A run passed its completion barrier.
pub fn run_completed(
    candidates: usize,
    cards: usize,
    completed: usize,
    failed: usize,
    duration: Duration,
) {
    tracing::info!(
        event = "run_completed",
        candidates = candidates,
        cards = cards,
        completed = completed,
        failed = failed,
        duration_ms = duration.as_millis() as u64,
        "scoring run completed"
    );
}

/// Two cards registered with one orchestrator share a name.
pub fn duplicate_card(card_name: &str) {
    tracing::warn!(
        event = "duplicate_card",
        card = %card_name,
        "score card name registered more than once, results will overwrite"
    );
}
