//! Configuration system for Vigil.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod overrides_config;
pub mod reporting_config;
pub mod vigil_config;

pub use overrides_config::OverridesConfig;
pub use reporting_config::ReportingConfig;
pub use vigil_config::VigilConfig;
