use serde::{Deserialize, Serialize};

use super::{Position, ScoreData, ScoreValue, Statistics};
use crate::errors::ScoringError;

/// Which score of a result a tally reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    /// The score exactly as the card computed it.
    #[default]
    Original,
    /// The adjusted score, falling back to the original when absent.
    Adjusted,
}

/// Output of one score card for one candidate.
///
/// Created fresh per (candidate, card) invocation and frozen on build.
/// `card_name` identifies the producing card and is the aggregation key in
/// a [`ScoreSummary`](crate::summary::ScoreSummary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScoreResultRepr")]
pub struct ScoreResult {
    card_name: String,
    score: ScoreData,
    position: Position,
    statistics: Statistics,
}

/// Nested fields validate themselves while deserializing; the name is
/// checked by the builder.
#[derive(Deserialize)]
struct ScoreResultRepr {
    card_name: String,
    score: ScoreData,
    #[serde(default)]
    position: Option<Position>,
    #[serde(default)]
    statistics: Option<Statistics>,
}

impl TryFrom<ScoreResultRepr> for ScoreResult {
    type Error = ScoringError;

    fn try_from(repr: ScoreResultRepr) -> Result<Self, Self::Error> {
        ScoreResultBuilder {
            card_name: repr.card_name,
            score: repr.score,
            position: repr.position,
            statistics: repr.statistics,
        }
        .build()
    }
}

impl ScoreResult {
    pub fn builder(card_name: impl Into<String>, score: impl Into<ScoreData>) -> ScoreResultBuilder {
        ScoreResultBuilder {
            card_name: card_name.into(),
            score: score.into(),
            position: None,
            statistics: None,
        }
    }

    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    pub fn score_data(&self) -> &ScoreData {
        &self.score
    }

    /// Shorthand for `score_data().score()`.
    pub fn score(&self) -> ScoreValue {
        self.score.score()
    }

    pub fn score_of(&self, score_type: ScoreType) -> ScoreValue {
        match score_type {
            ScoreType::Original => self.score.score(),
            ScoreType::Adjusted => self.score.effective_score(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

/// Accumulator for [`ScoreResult`]. Never published before `build()`.
#[derive(Debug, Clone)]
pub struct ScoreResultBuilder {
    card_name: String,
    score: ScoreData,
    position: Option<Position>,
    statistics: Option<Statistics>,
}

impl ScoreResultBuilder {
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn build(self) -> Result<ScoreResult, ScoringError> {
        if self.card_name.trim().is_empty() {
            return Err(ScoringError::InvalidValue {
                field: "card_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(ScoreResult {
            card_name: self.card_name,
            score: self.score,
            position: self.position.unwrap_or_default(),
            statistics: self.statistics.unwrap_or_default(),
        })
    }
}
