//! Per-unit scoring errors.

use super::error_code::{self, PrankErrorCode};

/// Errors raised while one score card evaluates one candidate.
///
/// None of these abort a scoring run; the orchestrator records them per
/// (candidate, card) unit and the candidate simply lacks that card's result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("invalid input for {card}: field `{field}` {reason}")]
    InvalidInput {
        card: String,
        field: String,
        reason: String,
    },

    #[error("external dependency failed for {card}: {reason}")]
    ExternalDependency { card: String, reason: String },

    #[error("{card} timed out after {elapsed_ms}ms (limit {limit_ms}ms)")]
    Timeout {
        card: String,
        elapsed_ms: u64,
        limit_ms: u64,
    },

    #[error("{card} panicked: {message}")]
    Panicked { card: String, message: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ScoringError {
    /// A required candidate attribute is absent.
    pub fn missing(card: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            card: card.into(),
            field: field.into(),
            reason: "is missing".to_string(),
        }
    }

    /// A candidate attribute is present but outside its domain.
    pub fn out_of_domain(
        card: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            card: card.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The card that produced this error, when known.
    pub fn card(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { card, .. }
            | Self::ExternalDependency { card, .. }
            | Self::Timeout { card, .. }
            | Self::Panicked { card, .. } => Some(card),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl PrankErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::ExternalDependency { .. } => error_code::EXTERNAL_DEPENDENCY,
            Self::Timeout { .. } => error_code::TIMEOUT,
            Self::Panicked { .. } => error_code::CARD_PANICKED,
            Self::InvalidValue { .. } => error_code::INVALID_VALUE,
        }
    }
}
