//! # prank-core
//!
//! Foundation crate for the prank scoring engine.
//! Defines the result data model, the concurrent per-candidate score summary,
//! the score card contract, request options, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod options;
pub mod summary;
pub mod telemetry;
pub mod tools;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PrankConfig;
pub use errors::{ConfigError, PrankError, PrankResult, ScoringError};
pub use models::{
    Position, ScoreData, ScoreResult, ScoreType, ScoreValue, Statistics,
};
pub use options::RequestOptions;
pub use summary::{LazyScoreSummary, ScoreSummary};
pub use traits::{Cancellable, CancellationToken, Scorable, ScoreCard};

/// Exact decimal type used for every score, bound, and statistic.
pub use rust_decimal::Decimal;
