use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `prank_engine=debug`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(defaults::DEFAULT_LOG_FILTER)
    }
}
