//! Override plugin loading errors.

use super::error_code::{self, VigilErrorCode};

/// Errors raised while loading a single override plugin.
///
/// None of these abort a preload scan; the failing path is logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Failed to load {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("{symbol} not found in {path}")]
    SymbolNotFound { path: String, symbol: String },

    #[error("Error loading overrides from {path} (entry returned {code})")]
    EntryFailed { path: String, code: i32 },
}

impl VigilErrorCode for PluginError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LoadFailed { .. } => error_code::PLUGIN_LOAD_FAILED,
            Self::SymbolNotFound { .. } => error_code::PLUGIN_SYMBOL_MISSING,
            Self::EntryFailed { .. } => error_code::PLUGIN_ENTRY_FAILED,
        }
    }
}
