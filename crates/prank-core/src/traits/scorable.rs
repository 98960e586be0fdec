use crate::summary::ScoreSummary;

/// A candidate that score cards can evaluate.
///
/// Concrete cards read whatever raw attributes they need from the concrete
/// type; the engine only needs access to the candidate's own summary, which
/// must be created on first access (see
/// [`LazyScoreSummary`](crate::summary::LazyScoreSummary)).
pub trait Scorable: Send + Sync {
    fn score_summary(&self) -> &ScoreSummary;
}
