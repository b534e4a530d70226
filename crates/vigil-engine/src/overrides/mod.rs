//! Overrides: user behaviors attached to monitors by matching rules, and
//! the plugin preload that registers them.

pub mod behavior;
pub mod plugin;
pub mod registry;

pub use behavior::{Override, SeverityOverride};
pub use plugin::{DylibLoader, PluginEntryFn, PluginLoad, PluginLoader, PreloadSummary};
pub use registry::{OverrideRegistry, RuleCounts};
