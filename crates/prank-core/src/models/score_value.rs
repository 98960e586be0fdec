use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Exact decimal score.
///
/// Backed by [`Decimal`] so repeated aggregation and comparison of the same
/// inputs is reproducible digit for digit. No `f64` constructor is
/// provided.
///
/// `+` and `-` panic outside the `Decimal` range, as `Decimal` does; use
/// [`checked_add`](ScoreValue::checked_add) on untrusted magnitudes.
/// [`Sum`] saturates at the range bounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ScoreValue(Decimal);

impl ScoreValue {
    pub const ZERO: ScoreValue = ScoreValue(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Parse a decimal literal such as `"2.50"`, keeping its scale.
    pub fn parse(text: &str) -> Result<Self, ScoringError> {
        Decimal::from_str(text.trim())
            .map(Self)
            .map_err(|e| ScoringError::InvalidValue {
                field: "score".to_string(),
                reason: format!("`{text}` is not a decimal: {e}"),
            })
    }

    /// Get the raw decimal value.
    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ScoreValue {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for ScoreValue {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for ScoreValue {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<i32> for ScoreValue {
    fn from(value: i32) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<u32> for ScoreValue {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<ScoreValue> for Decimal {
    fn from(s: ScoreValue) -> Self {
        s.0
    }
}

impl Add for ScoreValue {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for ScoreValue {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for ScoreValue {
    type Output = Self;
    fn mul(self, rhs: Decimal) -> Self {
        Self(self.0 * rhs)
    }
}

impl Sum for ScoreValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a ScoreValue> for ScoreValue {
    fn sum<I: Iterator<Item = &'a ScoreValue>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_addition_is_exact() {
        let total = ScoreValue::parse("2.50").unwrap() + ScoreValue::parse("1.00").unwrap();
        assert_eq!(total, ScoreValue::parse("3.50").unwrap());
        assert_eq!(total.to_string(), "3.50");
    }

    #[test]
    fn tenths_sum_without_drift() {
        let tenth = ScoreValue::parse("0.1").unwrap();
        let total: ScoreValue = std::iter::repeat(tenth).take(10).sum();
        assert_eq!(total, ScoreValue::from(1));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = ScoreValue::parse("ten").unwrap_err();
        assert!(matches!(err, ScoringError::InvalidValue { .. }));
    }

    #[test]
    fn negative_zero_is_not_negative() {
        assert!(!ScoreValue::parse("-0").unwrap().is_negative());
        assert!(ScoreValue::from(-3).is_negative());
    }

    #[test]
    fn sum_saturates_instead_of_panicking() {
        let max = ScoreValue::new(Decimal::MAX);
        let total: ScoreValue = [max, ScoreValue::from(1)].iter().sum();
        assert_eq!(total, max);
        assert_eq!(max.checked_add(ScoreValue::from(1)), None);
        assert_eq!(
            ScoreValue::from(2).checked_add(ScoreValue::from(3)),
            Some(ScoreValue::from(5))
        );
    }
}
