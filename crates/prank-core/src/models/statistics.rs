use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::tools::scoring_tool;

/// Descriptive aggregates for one card's evaluation of one candidate (or a
/// batch of samples).
///
/// `standard_deviation` and the deviation fields are never negative, and
/// `min <= max` whenever both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatisticsRepr")]
pub struct Statistics {
    average: Decimal,
    standard_deviation: Decimal,
    min: Option<Decimal>,
    max: Option<Decimal>,
    sample_count: Option<u64>,
    mean_deviation: Option<Decimal>,
    median_deviation: Option<Decimal>,
}

#[derive(Deserialize)]
struct StatisticsRepr {
    average: Decimal,
    standard_deviation: Decimal,
    #[serde(default)]
    min: Option<Decimal>,
    #[serde(default)]
    max: Option<Decimal>,
    #[serde(default)]
    sample_count: Option<u64>,
    #[serde(default)]
    mean_deviation: Option<Decimal>,
    #[serde(default)]
    median_deviation: Option<Decimal>,
}

impl TryFrom<StatisticsRepr> for Statistics {
    type Error = ScoringError;

    fn try_from(repr: StatisticsRepr) -> Result<Self, Self::Error> {
        StatisticsBuilder {
            average: repr.average,
            standard_deviation: repr.standard_deviation,
            min: repr.min,
            max: repr.max,
            sample_count: repr.sample_count,
            mean_deviation: repr.mean_deviation,
            median_deviation: repr.median_deviation,
        }
        .build()
    }
}

impl Statistics {
    pub fn builder() -> StatisticsBuilder {
        StatisticsBuilder::default()
    }

    /// Compute every aggregate from raw samples.
    ///
    /// The standard deviation is the population deviation. An empty slice
    /// yields all-zero statistics with a sample count of 0.
    pub fn from_samples(samples: &[Decimal]) -> Result<Self, ScoringError> {
        if samples.is_empty() {
            return Self::builder().sample_count(0).build();
        }

        let mut builder = Self::builder()
            .average(scoring_tool::mean(samples)?)
            .standard_deviation(scoring_tool::standard_deviation(samples)?)
            .mean_deviation(scoring_tool::mean_deviation(samples)?)
            .median_deviation(scoring_tool::median_deviation(samples)?)
            .sample_count(samples.len() as u64);

        if let (Some(min), Some(max)) = (
            samples.iter().min().copied(),
            samples.iter().max().copied(),
        ) {
            builder = builder.min(min).max(max);
        }
        builder.build()
    }

    pub fn average(&self) -> Decimal {
        self.average
    }

    pub fn standard_deviation(&self) -> Decimal {
        self.standard_deviation
    }

    pub fn min(&self) -> Option<Decimal> {
        self.min
    }

    pub fn max(&self) -> Option<Decimal> {
        self.max
    }

    pub fn sample_count(&self) -> Option<u64> {
        self.sample_count
    }

    pub fn mean_deviation(&self) -> Option<Decimal> {
        self.mean_deviation
    }

    pub fn median_deviation(&self) -> Option<Decimal> {
        self.median_deviation
    }
}

/// Accumulator for [`Statistics`]. Local to the constructing function;
/// `build()` validates and freezes.
#[derive(Debug, Clone, Default)]
pub struct StatisticsBuilder {
    average: Decimal,
    standard_deviation: Decimal,
    min: Option<Decimal>,
    max: Option<Decimal>,
    sample_count: Option<u64>,
    mean_deviation: Option<Decimal>,
    median_deviation: Option<Decimal>,
}

impl StatisticsBuilder {
    pub fn average(mut self, average: Decimal) -> Self {
        self.average = average;
        self
    }

    pub fn standard_deviation(mut self, standard_deviation: Decimal) -> Self {
        self.standard_deviation = standard_deviation;
        self
    }

    pub fn min(mut self, min: Decimal) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: Decimal) -> Self {
        self.max = Some(max);
        self
    }

    pub fn sample_count(mut self, sample_count: u64) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    pub fn mean_deviation(mut self, mean_deviation: Decimal) -> Self {
        self.mean_deviation = Some(mean_deviation);
        self
    }

    pub fn median_deviation(mut self, median_deviation: Decimal) -> Self {
        self.median_deviation = Some(median_deviation);
        self
    }

    pub fn build(self) -> Result<Statistics, ScoringError> {
        non_negative("standard_deviation", Some(self.standard_deviation))?;
        non_negative("mean_deviation", self.mean_deviation)?;
        non_negative("median_deviation", self.median_deviation)?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ScoringError::InvalidValue {
                    field: "min".to_string(),
                    reason: format!("min {min} exceeds max {max}"),
                });
            }
        }

        Ok(Statistics {
            average: self.average,
            standard_deviation: self.standard_deviation,
            min: self.min,
            max: self.max,
            sample_count: self.sample_count,
            mean_deviation: self.mean_deviation,
            median_deviation: self.median_deviation,
        })
    }
}

fn non_negative(field: &str, value: Option<Decimal>) -> Result<(), ScoringError> {
    match value {
        Some(v) if v.is_sign_negative() && !v.is_zero() => Err(ScoringError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be >= 0, got {v}"),
        }),
        _ => Ok(()),
    }
}
