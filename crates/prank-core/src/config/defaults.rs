// Single source of truth for all default values.

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "prank.toml";
pub const USER_CONFIG_DIR: &str = ".prank";
pub const USER_CONFIG_FILENAME: &str = "config.toml";

// --- Engine ---
/// 0 lets rayon pick one worker per logical CPU.
pub const DEFAULT_THREADS: usize = 0;
pub const WORKER_THREAD_PREFIX: &str = "prank-worker";

// --- Logging ---
pub const LOG_ENV_VAR: &str = "PRANK_LOG";
pub const DEFAULT_LOG_FILTER: &str = "prank=info";

// --- Environment overrides ---
pub const ENV_ENGINE_THREADS: &str = "PRANK_ENGINE_THREADS";
pub const ENV_ENGINE_DEFAULT_TIMEOUT_MS: &str = "PRANK_ENGINE_DEFAULT_TIMEOUT_MS";
pub const ENV_LOG_FILTER: &str = "PRANK_LOG_FILTER";
