//! Severity levels and classification areas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Report severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ignore,
    Issue,
    Warning,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Ignore,
        Severity::Issue,
        Severity::Warning,
        Severity::Critical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Issue => "issue",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown severity '{s}'"))
    }
}

/// Display/classification area of an issue. Never consulted for escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Area {
    Event,
    Buffer,
    Query,
    Caps,
    Seek,
    State,
    FileCheck,
    RunError,
    Other,
}

impl Area {
    pub const ALL: [Area; 9] = [
        Area::Event,
        Area::Buffer,
        Area::Query,
        Area::Caps,
        Area::Seek,
        Area::State,
        Area::FileCheck,
        Area::RunError,
        Area::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Buffer => "buffer",
            Self::Query => "query",
            Self::Caps => "caps",
            Self::Seek => "seek",
            Self::State => "state",
            Self::FileCheck => "file-check",
            Self::RunError => "run-error",
            Self::Other => "other",
        }
    }

    /// Numeric tag stored in the upper half of an issue id.
    pub const fn index(self) -> u16 {
        match self {
            Self::Event => 1,
            Self::Buffer => 2,
            Self::Query => 3,
            Self::Caps => 4,
            Self::Seek => 5,
            Self::State => 6,
            Self::FileCheck => 7,
            Self::RunError => 8,
            Self::Other => 100,
        }
    }

    pub fn from_index(index: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.index() == index)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
