//! Decimal statistics and bucket scoring.
//!
//! Everything here is exact decimal arithmetic except the square root,
//! which is rounded to [`STATISTICS_SCALE`] places so results stay
//! reproducible across runs. Intermediate sums and products that leave the
//! `Decimal` range are reported as [`ScoringError::InvalidValue`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::errors::ScoringError;
use crate::models::ScoreValue;

/// Decimal places kept for derived statistics.
pub const STATISTICS_SCALE: u32 = 10;

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(samples: &[Decimal]) -> Result<Decimal, ScoringError> {
    if samples.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let total = samples
        .iter()
        .try_fold(Decimal::ZERO, |acc, x| acc.checked_add(*x))
        .ok_or_else(|| overflow("mean", "sum of samples"))?;
    Ok((total / Decimal::from(samples.len())).round_dp(STATISTICS_SCALE))
}

/// Population standard deviation.
pub fn standard_deviation(samples: &[Decimal]) -> Result<Decimal, ScoringError> {
    if samples.len() < 2 {
        return Ok(Decimal::ZERO);
    }
    let avg = mean(samples)?;
    let squared = samples
        .iter()
        .map(|x| {
            x.checked_sub(avg)
                .and_then(|delta| delta.checked_mul(delta))
                .ok_or_else(|| overflow("standard_deviation", "squared deviation"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let variance = mean(&squared)?;
    variance
        .sqrt()
        .map(|sd| sd.round_dp(STATISTICS_SCALE))
        .ok_or_else(|| invalid("standard_deviation", format!("no square root for variance {variance}")))
}

/// Mean absolute deviation around the mean.
pub fn mean_deviation(samples: &[Decimal]) -> Result<Decimal, ScoringError> {
    let avg = mean(samples)?;
    mean(&absolute_deviations(samples, avg, "mean_deviation")?)
}

/// Median. Zero for an empty slice; the mean of the middle pair for even
/// lengths.
pub fn median(samples: &[Decimal]) -> Result<Decimal, ScoringError> {
    if samples.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let mut sorted = samples.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Ok(sorted[mid]);
    }
    let pair = sorted[mid - 1]
        .checked_add(sorted[mid])
        .ok_or_else(|| overflow("median", "sum of middle pair"))?;
    Ok((pair / Decimal::TWO).round_dp(STATISTICS_SCALE))
}

/// Median absolute deviation around the median.
pub fn median_deviation(samples: &[Decimal]) -> Result<Decimal, ScoringError> {
    let mid = median(samples)?;
    median(&absolute_deviations(samples, mid, "median_deviation")?)
}

fn absolute_deviations(
    samples: &[Decimal],
    center: Decimal,
    field: &str,
) -> Result<Vec<Decimal>, ScoringError> {
    samples
        .iter()
        .map(|x| {
            x.checked_sub(center)
                .map(|delta| delta.abs())
                .ok_or_else(|| overflow(field, "deviation"))
        })
        .collect()
}

/// Maps a value inside `[low, high]` onto `buckets` evenly spaced point
/// levels between `min_points` and `max_points`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRange {
    pub low: Decimal,
    pub high: Decimal,
    pub min_points: ScoreValue,
    pub max_points: ScoreValue,
    pub buckets: u32,
    /// When set, values near `low` earn the most points.
    pub lower_is_better: bool,
}

impl BucketRange {
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.buckets == 0 {
            return Err(invalid("buckets", "must be greater than 0"));
        }
        if self.low > self.high {
            return Err(invalid(
                "low",
                format!("range low {} exceeds high {}", self.low, self.high),
            ));
        }
        if self.min_points > self.max_points {
            return Err(invalid(
                "min_points",
                format!(
                    "min_points {} exceeds max_points {}",
                    self.min_points, self.max_points
                ),
            ));
        }
        if self.high.checked_sub(self.low).is_none() {
            return Err(overflow("low", "range width"));
        }
        if self.max_points.value().checked_sub(self.min_points.value()).is_none() {
            return Err(overflow("min_points", "point spread"));
        }
        Ok(())
    }

    /// Zero-based bucket the value falls in, after direction is applied.
    /// Values outside the range are clamped to its ends.
    pub fn bucket_of(&self, value: Decimal) -> Result<u32, ScoringError> {
        self.validate()?;
        let last = self.buckets - 1;
        // validate() checked the width; every clamped offset is no wider.
        let span = self.high - self.low;
        let raw = if span.is_zero() {
            last
        } else {
            let clamped = value.clamp(self.low, self.high);
            let fraction = (clamped - self.low) / span;
            (fraction * Decimal::from(self.buckets))
                .floor()
                .to_u32()
                .unwrap_or(last)
                .min(last)
        };
        Ok(if self.lower_is_better && !span.is_zero() {
            last - raw
        } else {
            raw
        })
    }

    /// Points awarded for the value.
    pub fn points(&self, value: Decimal) -> Result<ScoreValue, ScoringError> {
        let bucket = self.bucket_of(value)?;
        if self.buckets == 1 {
            return Ok(self.max_points);
        }
        let spread = self.max_points - self.min_points;
        let step = (Decimal::from(bucket) / Decimal::from(self.buckets - 1)).round_dp(STATISTICS_SCALE);
        // step is in [0, 1], so the result stays between min and max points.
        Ok(self.min_points + spread * step)
    }
}

fn overflow(field: &str, what: &str) -> ScoringError {
    invalid(field, format!("{what} exceeds the decimal range"))
}

fn invalid(field: &str, reason: impl Into<String>) -> ScoringError {
    ScoringError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}
