//! Override plugin configuration.

use serde::{Deserialize, Serialize};

/// Configuration for override plugin preloading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OverridesConfig {
    /// Shared libraries exporting `vigil_create_overrides`.
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Load `plugins` during engine init. Default: true.
    pub preload: Option<bool>,
}

impl OverridesConfig {
    /// Returns whether plugins are preloaded at init, defaulting to true.
    pub fn effective_preload(&self) -> bool {
        self.preload.unwrap_or(true)
    }

    /// Returns the plugin list as a single comma-separated string.
    pub fn plugin_spec(&self) -> String {
        self.plugins.join(",")
    }
}
