//! Core types shared by the Vigil validation engine: errors, configuration,
//! tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::VigilConfig;
pub use errors::{VigilError, VigilErrorCode};
