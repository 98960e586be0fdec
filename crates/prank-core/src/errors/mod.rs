//! Error handling for prank.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod prank_error;
pub mod scoring_error;

pub use config_error::ConfigError;
pub use error_code::PrankErrorCode;
pub use prank_error::{PrankError, PrankResult};
pub use scoring_error::ScoringError;
