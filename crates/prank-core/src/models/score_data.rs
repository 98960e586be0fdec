use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ScoreValue;
use crate::errors::ScoringError;

/// The score a card awarded, with optional adjustment and point bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScoreDataRepr")]
pub struct ScoreData {
    score: ScoreValue,
    adjusted_score: Option<ScoreValue>,
    min_points: Option<ScoreValue>,
    max_points: Option<ScoreValue>,
    /// Raw candidate value the score was derived from.
    scored_value: Option<Decimal>,
}

#[derive(Deserialize)]
struct ScoreDataRepr {
    score: ScoreValue,
    #[serde(default)]
    adjusted_score: Option<ScoreValue>,
    #[serde(default)]
    min_points: Option<ScoreValue>,
    #[serde(default)]
    max_points: Option<ScoreValue>,
    #[serde(default)]
    scored_value: Option<Decimal>,
}

impl TryFrom<ScoreDataRepr> for ScoreData {
    type Error = ScoringError;

    fn try_from(repr: ScoreDataRepr) -> Result<Self, Self::Error> {
        ScoreDataBuilder {
            data: ScoreData {
                score: repr.score,
                adjusted_score: repr.adjusted_score,
                min_points: repr.min_points,
                max_points: repr.max_points,
                scored_value: repr.scored_value,
            },
        }
        .build()
    }
}

impl ScoreData {
    /// Score data carrying only a score.
    pub fn new(score: ScoreValue) -> Self {
        Self {
            score,
            adjusted_score: None,
            min_points: None,
            max_points: None,
            scored_value: None,
        }
    }

    pub fn builder(score: ScoreValue) -> ScoreDataBuilder {
        ScoreDataBuilder {
            data: Self::new(score),
        }
    }

    pub fn score(&self) -> ScoreValue {
        self.score
    }

    pub fn adjusted_score(&self) -> Option<ScoreValue> {
        self.adjusted_score
    }

    /// Adjusted score when present, otherwise the original score.
    pub fn effective_score(&self) -> ScoreValue {
        self.adjusted_score.unwrap_or(self.score)
    }

    pub fn min_points(&self) -> Option<ScoreValue> {
        self.min_points
    }

    pub fn max_points(&self) -> Option<ScoreValue> {
        self.max_points
    }

    pub fn scored_value(&self) -> Option<Decimal> {
        self.scored_value
    }
}

impl From<ScoreValue> for ScoreData {
    fn from(score: ScoreValue) -> Self {
        Self::new(score)
    }
}

/// Accumulator for [`ScoreData`].
#[derive(Debug, Clone)]
pub struct ScoreDataBuilder {
    data: ScoreData,
}

impl ScoreDataBuilder {
    pub fn adjusted_score(mut self, adjusted: ScoreValue) -> Self {
        self.data.adjusted_score = Some(adjusted);
        self
    }

    pub fn min_points(mut self, min_points: ScoreValue) -> Self {
        self.data.min_points = Some(min_points);
        self
    }

    pub fn max_points(mut self, max_points: ScoreValue) -> Self {
        self.data.max_points = Some(max_points);
        self
    }

    pub fn scored_value(mut self, value: Decimal) -> Self {
        self.data.scored_value = Some(value);
        self
    }

    pub fn build(self) -> Result<ScoreData, ScoringError> {
        if let (Some(min), Some(max)) = (self.data.min_points, self.data.max_points) {
            if min > max {
                return Err(ScoringError::InvalidValue {
                    field: "min_points".to_string(),
                    reason: format!("min_points {min} exceeds max_points {max}"),
                });
            }
        }
        Ok(self.data)
    }
}
