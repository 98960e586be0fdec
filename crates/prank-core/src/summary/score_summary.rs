//! ScoreSummary: concurrent per-candidate result map via DashMap.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use crate::models::{ScoreResult, ScoreType, ScoreValue};
use crate::telemetry::events;

/// Thread-safe map from card name to that card's result for one candidate.
///
/// Writers for different card names never contend on a global lock. A second
/// write under the same name replaces the first (last writer wins) and is
/// logged as a name collision. Entries are never removed.
#[derive(Default)]
pub struct ScoreSummary {
    results: DashMap<String, Arc<ScoreResult>>,
}

impl ScoreSummary {
    pub fn new() -> Self {
        Self {
            results: DashMap::new(),
        }
    }

    /// Insert or replace the result for `name`.
    ///
    /// Returns the displaced result on a collision.
    pub fn add_result(&self, name: &str, result: ScoreResult) -> Option<Arc<ScoreResult>> {
        let result = Arc::new(result);
        let previous = self.results.insert(name.to_string(), Arc::clone(&result));
        if let Some(ref prev) = previous {
            events::name_collision(name, &prev.score().to_string(), &result.score().to_string());
        }
        previous
    }

    pub fn get_result(&self, name: &str) -> Option<Arc<ScoreResult>> {
        self.results.get(name).map(|r| Arc::clone(r.value()))
    }

    /// Point-in-time snapshot, ordered by card name.
    pub fn all_results(&self) -> BTreeMap<String, Arc<ScoreResult>> {
        self.results
            .iter()
            .map(|r| (r.key().clone(), Arc::clone(r.value())))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.results.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Names of every card with a result, sorted.
    pub fn card_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.results.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    /// Exact sum of the named cards' scores. Cards without a result are
    /// skipped, so partial summaries stay rankable. Saturates at the
    /// `Decimal` bounds.
    pub fn tally_score<S: AsRef<str>>(&self, names: &[S], score_type: ScoreType) -> ScoreValue {
        names
            .iter()
            .filter_map(|name| self.results.get(name.as_ref()))
            .map(|r| r.value().score_of(score_type))
            .sum()
    }

    /// Exact sum over every card present.
    pub fn tally_all(&self, score_type: ScoreType) -> ScoreValue {
        self.results
            .iter()
            .map(|r| r.value().score_of(score_type))
            .sum()
    }
}

impl fmt::Debug for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.all_results()
                    .iter()
                    .map(|(name, result)| (name.clone(), result.score())),
            )
            .finish()
    }
}
