//! Configuration system for prank.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod defaults;
pub mod engine_config;
pub mod logging_config;
pub mod prank_config;

pub use engine_config::EngineConfig;
pub use logging_config::LoggingConfig;
pub use prank_config::{ConfigOverrides, PrankConfig};
