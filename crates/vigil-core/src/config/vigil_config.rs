//! Top-level Vigil configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{OverridesConfig, ReportingConfig};
use crate::constants::{ENV_FLAGS, ENV_OVERRIDE, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VIGIL_FLAGS`, `VIGIL_OVERRIDE`)
/// 2. Project config (`vigil.toml` in project root)
/// 3. User config (`~/.vigil/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VigilConfig {
    pub reporting: ReportingConfig,
    pub overrides: OverridesConfig,
}

impl VigilConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Files are validated strictly; env tokens are parsed leniently later.
        Self::validate(&config)?;

        // Highest priority: environment variables
        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &VigilConfig) -> Result<(), ConfigError> {
        if let Some(flag) = config.reporting.first_unknown_flag() {
            return Err(ConfigError::ValidationFailed {
                field: "reporting.fatal".to_string(),
                message: format!("unknown fatal flag '{flag}'"),
            });
        }
        if config.overrides.plugins.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "overrides.plugins".to_string(),
                message: "plugin paths must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.vigil/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".vigil").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut VigilConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: VigilConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut VigilConfig, other: &VigilConfig) {
        if !other.reporting.fatal.is_empty() {
            base.reporting.fatal = other.reporting.fatal.clone();
        }
        if !other.overrides.plugins.is_empty() {
            base.overrides.plugins = other.overrides.plugins.clone();
        }
        if other.overrides.preload.is_some() {
            base.overrides.preload = other.overrides.preload;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut VigilConfig) {
        if let Ok(val) = std::env::var(ENV_FLAGS) {
            if !val.trim().is_empty() {
                config.reporting.fatal = split_list(&val, &[',', ':', ';', ' ', '\t']);
            }
        }
        if let Ok(val) = std::env::var(ENV_OVERRIDE) {
            if !val.trim().is_empty() {
                config.overrides.plugins = split_list(&val, &[',']);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn split_list(value: &str, separators: &[char]) -> Vec<String> {
    value
        .split(|c| separators.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_empty_entries() {
        let parts = split_list(" a.so,,b.so ,", &[',']);
        assert_eq!(parts, vec!["a.so".to_string(), "b.so".to_string()]);
    }

    #[test]
    fn merge_keeps_base_when_other_is_unset() {
        let mut base = VigilConfig::default();
        base.reporting.fatal = vec!["fatal_criticals".into()];
        base.overrides.preload = Some(false);
        VigilConfig::merge(&mut base, &VigilConfig::default());
        assert_eq!(base.reporting.fatal, vec!["fatal_criticals".to_string()]);
        assert_eq!(base.overrides.preload, Some(false));
    }
}
