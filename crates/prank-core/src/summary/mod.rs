//! Per-candidate aggregation of score card results.

pub mod lazy;
pub mod score_summary;

pub use lazy::LazyScoreSummary;
pub use score_summary::ScoreSummary;
