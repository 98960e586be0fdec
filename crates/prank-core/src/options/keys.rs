// Well-known option keys understood by the engine and the reference cards.

pub const ENABLED: &str = "enabled";
pub const TIMEOUT_MS: &str = "timeout_ms";
pub const MIN_POINTS: &str = "min_points";
pub const MAX_POINTS: &str = "max_points";
pub const BUCKET_COUNT: &str = "bucket_count";
