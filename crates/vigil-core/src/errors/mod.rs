//! Error handling for Vigil.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod plugin_error;
pub mod vigil_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::VigilErrorCode;
pub use plugin_error::PluginError;
pub use vigil_error::VigilError;
