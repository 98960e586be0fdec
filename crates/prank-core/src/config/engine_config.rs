use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Worker threads in the scoring pool. `None` = one per CPU.
    pub threads: Option<usize>,
    /// Time budget per (candidate, card) unit when the card's options do
    /// not set `timeout_ms`.
    pub default_timeout_ms: Option<u64>,
}

impl EngineConfig {
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(defaults::DEFAULT_THREADS)
    }

    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout_ms.map(Duration::from_millis)
    }
}
