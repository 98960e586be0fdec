//! Stateless numeric helpers shared by score cards.

pub mod scoring_tool;

pub use scoring_tool::BucketRange;
