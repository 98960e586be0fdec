use crate::errors::{ConfigError, ScoringError};
use crate::models::ScoreResult;
use crate::options::RequestOptions;

use super::Scorable;

/// A stateless, pluggable scoring strategy.
///
/// Implementations hold only configuration fixed at construction, so a
/// single instance may be shared (`Arc<dyn ScoreCard<T>>`) and invoked
/// concurrently across threads and candidates. Introducing mutable instance
/// state breaks that contract for the whole run.
///
/// Only [`score_with`](ScoreCard::score_with) and [`name`](ScoreCard::name)
/// are required. The mutating entry points are provided on top of
/// `score_with` and should not be overridden: that keeps the mutating and
/// read-only paths in agreement.
pub trait ScoreCard<T: Scorable + ?Sized>: Send + Sync {
    /// Name under which results are aggregated. Must be unique per run.
    fn name(&self) -> &str;

    /// Evaluate `candidate` honoring per-request `options`.
    ///
    /// Must be a pure function of the candidate, the options, and the card's
    /// construction-time configuration. Options override construction-time
    /// defaults where both are defined. Missing or out-of-domain attributes
    /// fail with [`ScoringError::InvalidInput`].
    fn score_with(&self, candidate: &T, options: &RequestOptions)
        -> Result<ScoreResult, ScoringError>;

    /// Evaluate with construction-time defaults only. No mutation.
    fn score(&self, candidate: &T) -> Result<ScoreResult, ScoringError> {
        self.score_with(candidate, &RequestOptions::default())
    }

    /// Evaluate and record the result in the candidate's summary.
    fn update_objects_with_score(&self, candidate: &T) -> Result<(), ScoringError> {
        self.update_objects_with_score_with(candidate, &RequestOptions::default())
    }

    /// Evaluate with `options` and record the result under [`name`](ScoreCard::name).
    ///
    /// On error nothing is written.
    fn update_objects_with_score_with(
        &self,
        candidate: &T,
        options: &RequestOptions,
    ) -> Result<(), ScoringError> {
        let result = self.score_with(candidate, options)?;
        candidate.score_summary().add_result(self.name(), result);
        Ok(())
    }

    /// Reject malformed options before any scoring work begins.
    fn validate_options(&self, options: &RequestOptions) -> Result<(), ConfigError> {
        let _ = options;
        Ok(())
    }
}
