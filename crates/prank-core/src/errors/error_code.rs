//! PrankErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured code string
/// that callers can match on without parsing messages.
pub trait PrankErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const EXTERNAL_DEPENDENCY: &str = "EXTERNAL_DEPENDENCY";
pub const TIMEOUT: &str = "TIMEOUT";
pub const CARD_PANICKED: &str = "CARD_PANICKED";
pub const INVALID_VALUE: &str = "INVALID_VALUE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CANCELLED: &str = "CANCELLED";
