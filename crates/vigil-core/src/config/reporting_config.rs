//! Report and fatal-escalation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::KNOWN_FLAGS;

/// Configuration for report handling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportingConfig {
    /// Fatal flag tokens (`fatal_issues`, `fatal_warnings`,
    /// `fatal_criticals`, `all`). Default: none, nothing is fatal.
    #[serde(default)]
    pub fatal: Vec<String>,
}

impl ReportingConfig {
    /// Returns the fatal flags as a single comma-separated policy string.
    pub fn fatal_spec(&self) -> String {
        self.fatal.join(",")
    }

    /// Returns the first token that is not a known fatal flag, if any.
    pub fn first_unknown_flag(&self) -> Option<&str> {
        self.fatal
            .iter()
            .map(|flag| flag.trim())
            .find(|flag| {
                !KNOWN_FLAGS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(flag))
            })
    }
}
