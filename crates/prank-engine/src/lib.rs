//! # prank-engine
//!
//! The scoring orchestrator. [`Prankster`] fans (candidate, card) units out
//! over a dedicated rayon pool, records each success in the candidate's
//! summary, and collects failures into a [`ScoringReport`] once every unit
//! has finished.

pub mod card_options;
pub mod prankster;
pub mod report;

pub use card_options::CardOptions;
pub use prankster::Prankster;
pub use report::{ScoringReport, UnitFailure};
