//! Issue catalog errors.

use super::error_code::{self, VigilErrorCode};

/// Errors from issue catalog lookups on the report path.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown issue id {0:#x}")]
    UnknownIssue(u32),
}

impl VigilErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::UNKNOWN_ISSUE
    }
}
