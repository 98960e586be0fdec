//! Aggregate error for run-level operations.

use super::error_code::{self, PrankErrorCode};
use super::{ConfigError, ScoringError};

/// Errors that stop a scoring operation as a whole.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrankError {
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scoring run cancelled")]
    Cancelled,
}

impl PrankErrorCode for PrankError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

pub type PrankResult<T> = Result<T, PrankError>;
