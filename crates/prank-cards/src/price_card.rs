//! Price score card: bucket scoring of a candidate's price against a
//! configured price range, cheapest scoring highest.

use prank_core::models::{Position, ScoreData, ScoreResult, ScoreValue, Statistics};
use prank_core::options::keys;
use prank_core::tools::BucketRange;
use prank_core::{ConfigError, Decimal, RequestOptions, ScoreCard, ScoringError};

use crate::candidate::ExampleObject;
use crate::option_error;

pub const PRICE_CARD_NAME: &str = "PriceScoreCard";

const DEFAULT_MIN_POINTS: i64 = 0;
const DEFAULT_MAX_POINTS: i64 = 10;
const DEFAULT_BUCKETS: u32 = 10;

/// Scores `price` into one of `buckets` point levels over `[low, high]`.
///
/// The original position is the bucket (0 is the cheapest). The adjusted
/// position is the number of reference prices strictly below the
/// candidate's price. Statistics describe the reference prices, so every
/// candidate scored by one card reports the same market statistics.
#[derive(Debug, Clone)]
pub struct PriceScoreCard {
    low: Decimal,
    high: Decimal,
    reference_prices: Vec<Decimal>,
    statistics: Statistics,
}

impl PriceScoreCard {
    pub fn new(
        low: Decimal,
        high: Decimal,
        mut reference_prices: Vec<Decimal>,
    ) -> Result<Self, ConfigError> {
        if low > high {
            return Err(ConfigError::InvalidValue {
                field: "low".to_string(),
                message: format!("range low {low} exceeds high {high}"),
            });
        }
        reference_prices.sort_unstable();
        let statistics = Statistics::from_samples(&reference_prices).map_err(|e| {
            ConfigError::InvalidValue {
                field: "reference_prices".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            low,
            high,
            reference_prices,
            statistics,
        })
    }

    pub fn range(&self) -> (Decimal, Decimal) {
        (self.low, self.high)
    }

    pub fn reference_prices(&self) -> &[Decimal] {
        &self.reference_prices
    }

    fn bucket_range(&self, options: &RequestOptions) -> Result<BucketRange, ConfigError> {
        let range = BucketRange {
            low: self.low,
            high: self.high,
            min_points: options
                .get_decimal(keys::MIN_POINTS)?
                .map(ScoreValue::new)
                .unwrap_or(ScoreValue::from(DEFAULT_MIN_POINTS)),
            max_points: options
                .get_decimal(keys::MAX_POINTS)?
                .map(ScoreValue::new)
                .unwrap_or(ScoreValue::from(DEFAULT_MAX_POINTS)),
            buckets: options
                .get_u32(keys::BUCKET_COUNT)?
                .unwrap_or(DEFAULT_BUCKETS),
            lower_is_better: true,
        };
        range.validate().map_err(|e| match e {
            ScoringError::InvalidValue { field, reason } => ConfigError::InvalidValue {
                field,
                message: reason,
            },
            other => ConfigError::InvalidValue {
                field: "bucket_range".to_string(),
                message: other.to_string(),
            },
        })?;
        Ok(range)
    }
}

impl ScoreCard<ExampleObject> for PriceScoreCard {
    fn name(&self) -> &str {
        PRICE_CARD_NAME
    }

    fn score_with(
        &self,
        candidate: &ExampleObject,
        options: &RequestOptions,
    ) -> Result<ScoreResult, ScoringError> {
        let range = self.bucket_range(options).map_err(option_error)?;

        let price = candidate
            .price
            .ok_or_else(|| ScoringError::missing(PRICE_CARD_NAME, "price"))?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ScoringError::out_of_domain(
                PRICE_CARD_NAME,
                "price",
                format!("must be >= 0, got {price}"),
            ));
        }

        let points = range.points(price)?;
        // bucket_of counts from the most points down; position 0 is the best.
        let bucket = range.buckets - 1 - range.bucket_of(price)?;
        let rank = self.reference_prices.partition_point(|p| *p < price) as u32;

        let score_data = ScoreData::builder(points)
            .min_points(range.min_points)
            .max_points(range.max_points)
            .scored_value(price)
            .build()?;

        tracing::trace!(card = PRICE_CARD_NAME, %price, %points, bucket, "scored candidate");

        ScoreResult::builder(PRICE_CARD_NAME, score_data)
            .position(Position::with_adjusted(bucket, [rank]))
            .statistics(self.statistics.clone())
            .build()
    }

    fn validate_options(&self, options: &RequestOptions) -> Result<(), ConfigError> {
        self.bucket_range(options).map(|_| ())
    }
}
