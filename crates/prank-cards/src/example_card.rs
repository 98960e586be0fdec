//! Shipping score card.
//!
//! Score is the candidate's average shipping time plus a score adjustment;
//! the reported average is its shipping cost plus an average adjustment.
//! Position and standard deviation are the configured adjustments. The
//! adjustments let one card weigh more or less than the others.

use prank_core::models::{Position, ScoreData, ScoreResult, ScoreValue, Statistics};
use prank_core::{ConfigError, Decimal, RequestOptions, ScoreCard, ScoringError};

use crate::candidate::ExampleObject;
use crate::option_error;

pub const EXAMPLE_CARD_NAME: &str = "SolutionPriceScoreCard";

/// Option keys that override [`ExampleAdjustments`] per request.
pub mod keys {
    pub const SCORE_ADJUSTMENT: &str = "score_adjustment";
    pub const POSITION_ADJUSTMENT: &str = "position_adjustment";
    pub const AVERAGE_ADJUSTMENT: &str = "average_adjustment";
    pub const STANDARD_DEVIATION_ADJUSTMENT: &str = "standard_deviation_adjustment";
}

/// Construction-time adjustments of [`ExampleScoreCard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleAdjustments {
    pub score: i64,
    pub position: u32,
    pub average: Decimal,
    pub standard_deviation: Decimal,
}

impl Default for ExampleAdjustments {
    fn default() -> Self {
        Self {
            score: 5,
            position: 3,
            average: Decimal::from(2),
            standard_deviation: Decimal::new(10, 1),
        }
    }
}

impl ExampleAdjustments {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.standard_deviation.is_sign_negative() && !self.standard_deviation.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: keys::STANDARD_DEVIATION_ADJUSTMENT.to_string(),
                message: format!("must be >= 0, got {}", self.standard_deviation),
            });
        }
        Ok(())
    }

    /// Options win over these defaults key by key.
    fn resolve(&self, options: &RequestOptions) -> Result<Self, ConfigError> {
        let resolved = Self {
            score: options.get_i64(keys::SCORE_ADJUSTMENT)?.unwrap_or(self.score),
            position: options
                .get_u32(keys::POSITION_ADJUSTMENT)?
                .unwrap_or(self.position),
            average: options
                .get_decimal(keys::AVERAGE_ADJUSTMENT)?
                .unwrap_or(self.average),
            standard_deviation: options
                .get_decimal(keys::STANDARD_DEVIATION_ADJUSTMENT)?
                .unwrap_or(self.standard_deviation),
        };
        resolved.validate()?;
        Ok(resolved)
    }
}

/// Stateless shipping card; see the module docs for the formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleScoreCard {
    adjustments: ExampleAdjustments,
}

impl ExampleScoreCard {
    pub fn new() -> Self {
        Self {
            adjustments: ExampleAdjustments::default(),
        }
    }

    pub fn with_adjustments(adjustments: ExampleAdjustments) -> Result<Self, ConfigError> {
        adjustments.validate()?;
        Ok(Self { adjustments })
    }

    pub fn adjustments(&self) -> &ExampleAdjustments {
        &self.adjustments
    }
}

impl Default for ExampleScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCard<ExampleObject> for ExampleScoreCard {
    fn name(&self) -> &str {
        EXAMPLE_CARD_NAME
    }

    fn score_with(
        &self,
        candidate: &ExampleObject,
        options: &RequestOptions,
    ) -> Result<ScoreResult, ScoringError> {
        let adjustments = self.adjustments.resolve(options).map_err(option_error)?;

        let shipping_time = candidate
            .average_shipping_time
            .ok_or_else(|| ScoringError::missing(EXAMPLE_CARD_NAME, "average_shipping_time"))?;
        if shipping_time < 0 {
            return Err(ScoringError::out_of_domain(
                EXAMPLE_CARD_NAME,
                "average_shipping_time",
                format!("must be >= 0, got {shipping_time}"),
            ));
        }
        let shipping_cost = candidate
            .shipping_cost
            .ok_or_else(|| ScoringError::missing(EXAMPLE_CARD_NAME, "shipping_cost"))?;
        if shipping_cost.is_sign_negative() && !shipping_cost.is_zero() {
            return Err(ScoringError::out_of_domain(
                EXAMPLE_CARD_NAME,
                "shipping_cost",
                format!("must be >= 0, got {shipping_cost}"),
            ));
        }

        let score = shipping_time
            .checked_add(adjustments.score)
            .ok_or_else(|| {
                ScoringError::out_of_domain(
                    EXAMPLE_CARD_NAME,
                    "average_shipping_time",
                    "score overflows i64",
                )
            })?;

        let score_data = ScoreData::builder(ScoreValue::from(score))
            .scored_value(Decimal::from(shipping_time))
            .build()?;
        let average = shipping_cost
            .checked_add(adjustments.average)
            .ok_or_else(|| {
                ScoringError::out_of_domain(
                    EXAMPLE_CARD_NAME,
                    "shipping_cost",
                    "average overflows the decimal range",
                )
            })?;
        let statistics = Statistics::builder()
            .average(average)
            .standard_deviation(adjustments.standard_deviation)
            .build()?;

        tracing::trace!(card = EXAMPLE_CARD_NAME, score, "scored candidate");

        ScoreResult::builder(EXAMPLE_CARD_NAME, score_data)
            .position(Position::new(adjustments.position))
            .statistics(statistics)
            .build()
    }

    fn validate_options(&self, options: &RequestOptions) -> Result<(), ConfigError> {
        self.adjustments.resolve(options).map(|_| ())
    }
}
