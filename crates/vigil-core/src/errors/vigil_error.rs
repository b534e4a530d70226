//! Top-level error aggregating subsystem errors.

use super::error_code::VigilErrorCode;
use super::{CatalogError, ConfigError};

/// Errors surfaced by Vigil entry points.
/// Plugin failures never surface here; preload logs and skips them.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl VigilErrorCode for VigilError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
        }
    }
}
