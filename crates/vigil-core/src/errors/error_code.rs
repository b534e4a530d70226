//! VigilErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so hosts can match on a stable code
/// instead of the human-readable message.
pub trait VigilErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PLUGIN_LOAD_FAILED: &str = "PLUGIN_LOAD_FAILED";
pub const PLUGIN_SYMBOL_MISSING: &str = "PLUGIN_SYMBOL_MISSING";
pub const PLUGIN_ENTRY_FAILED: &str = "PLUGIN_ENTRY_FAILED";
pub const UNKNOWN_ISSUE: &str = "UNKNOWN_ISSUE";
