//! Immutable result data model.
//!
//! Every value here is built once (directly or through a builder local to
//! the constructing function) and never mutated afterwards.

pub mod position;
pub mod score_data;
pub mod score_result;
pub mod score_value;
pub mod statistics;

pub use position::Position;
pub use score_data::{ScoreData, ScoreDataBuilder};
pub use score_result::{ScoreResult, ScoreResultBuilder, ScoreType};
pub use score_value::ScoreValue;
pub use statistics::{Statistics, StatisticsBuilder};
