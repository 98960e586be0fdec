//! # prank-cards
//!
//! Reference score cards. Each card is stateless after construction: the
//! adjustments it is built with are the only configuration it holds, and
//! per-request [`RequestOptions`](prank_core::RequestOptions) override them.
//!
//! - [`ExampleScoreCard`]: shipping time and shipping cost adjustments.
//! - [`PriceScoreCard`]: bucket scoring of price against a configured range,
//!   lowest price scores highest.

pub mod candidate;
pub mod example_card;
pub mod price_card;

pub use candidate::ExampleObject;
pub use example_card::{ExampleAdjustments, ExampleScoreCard, EXAMPLE_CARD_NAME};
pub use price_card::{PriceScoreCard, PRICE_CARD_NAME};

use prank_core::{ConfigError, ScoringError};

/// Per-request option errors surface as scoring failures of the unit.
pub(crate) fn option_error(err: ConfigError) -> ScoringError {
    match err {
        ConfigError::InvalidValue { field, message }
        | ConfigError::ValidationFailed { field, message } => ScoringError::InvalidValue {
            field,
            reason: message,
        },
        other => ScoringError::InvalidValue {
            field: "options".to_string(),
            reason: other.to_string(),
        },
    }
}
